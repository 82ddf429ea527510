//! Breadcrumbs Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::Route;
use crate::store::{use_session, SessionStoreFields};

/// Home link plus one crumb per path part; the last one is plain text
#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let session = use_session();
    let default_route = use_app_context().config.with_value(|c| c.default_route.clone());
    let home = Route::from_name(&default_route).unwrap_or(Route::Users);

    let crumbs = move || session.location().with(|l| l.breadcrumbs(&home));

    view! {
        <div class="breadcrumbs" id="breadcrumbs">
            {move || crumbs().into_iter().enumerate().map(|(index, crumb)| {
                let separator = (index > 0).then(|| view! { <span>" / "</span> });
                let body = match crumb.href {
                    Some(href) => view! { <a href=href>{crumb.label}</a> }.into_any(),
                    None => crumb.label.into_any(),
                };
                view! { {separator} {body} }
            }).collect_view()}
        </div>
    }
}
