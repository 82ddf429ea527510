//! Search Box Component
//!
//! Free-text search input; changes reach the session after a quiet window.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_set_search, use_session};
use crate::utils::debounce;

#[component]
pub fn SearchBox() -> impl IntoView {
    let session = use_session();
    let wait_ms = use_app_context().config.with_value(|c| c.search_debounce_ms);

    let apply_search = debounce(wait_ms, move |term: String| store_set_search(&session, &term));

    view! {
        <div class="search-container">
            <div class="search-icon">"🔍"</div>
            <input
                type="text"
                id="searchInput"
                class="search-input"
                placeholder="Поиск..."
                on:input=move |ev| apply_search(event_target_value(&ev))
            />
        </div>
    }
}
