//! Content Region Component
//!
//! Renders the current route. Any change of location, search term or local
//! data replaces the whole region.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    CommentsView, EmptyStateView, LoadingState, NotFound, PostsView, TodosView, UsersView,
};
use crate::context::use_app_context;
use crate::pages::{load_page, Page};
use crate::router::Route;
use crate::store::{use_session, SessionStoreFields};

#[component]
pub fn ContentRegion() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let (page, set_page) = signal(Page::Loading("Загрузка..."));
    // Bumped per render; a fetch finishing after a newer render started is dropped
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let location = session.location().get();
        let term = session.search().get();
        let route = ctx.config.with_value(|c| location.route(&c.default_route));

        generation.update_value(|g| *g += 1);
        let ticket = generation.get_value();
        set_page.set(Page::loading(&route));
        if matches!(route, Route::NotFound(_)) {
            tracing::debug!("No route for #{}", location.path);
            return;
        }

        let data = ctx.data();
        spawn_local(async move {
            let loaded = load_page(&data, &route, &location, &term).await;
            if generation.get_value() == ticket {
                set_page.set(loaded);
            } else {
                tracing::debug!("Dropping stale render of #{}", location.path);
            }
        });
    });

    view! {
        <div class="content" id="content">
            {move || match page.get() {
                Page::Loading(message) => view! { <LoadingState message=message /> }.into_any(),
                Page::Empty(state) => view! { <EmptyStateView state=state /> }.into_any(),
                Page::NotFound => view! { <NotFound /> }.into_any(),
                Page::Users { stats, cards } => {
                    view! { <UsersView stats=stats cards=cards /> }.into_any()
                }
                Page::Todos { stats, cards, owner_id } => {
                    view! { <TodosView stats=stats cards=cards owner_id=owner_id /> }.into_any()
                }
                Page::Posts { stats, cards } => {
                    view! { <PostsView stats=stats cards=cards /> }.into_any()
                }
                Page::Comments { stats, cards } => {
                    view! { <CommentsView stats=stats cards=cards /> }.into_any()
                }
            }}
        </div>
    }
}
