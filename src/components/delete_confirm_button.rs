//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click asks, the second one deletes.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows `label` initially. When clicked, shows "Удалить?" with ✓/✗ buttons.
///
/// # Arguments
/// * `label` - Text of the initial delete button
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                type="button"
                class="delete-btn"
                on:click=move |_| set_confirm_delete.set(true)
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Удалить?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |_| set_confirm_delete.set(false)
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
