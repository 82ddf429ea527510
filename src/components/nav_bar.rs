//! Navigation Bar Component
//!
//! Logo and route links; the link for the current route is highlighted.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::Route;
use crate::store::{use_session, SessionStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();
    let default_route = use_app_context().config.with_value(|c| c.default_route.clone());

    view! {
        <header>
            <div class="logo">"Nexus Dashboard"</div>
            <nav>
                <ul>
                    {Route::NAV.into_iter().map(|route| {
                        let default_route = default_route.clone();
                        let href = route.href();
                        let label = route.label().to_string();
                        let is_active = move || {
                            session.location().with(|l| l.is_active(&route, &default_route))
                        };
                        view! {
                            <li>
                                <a href=href class="nav-link" class:active=is_active>
                                    {label}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>
        </header>
    }
}
