//! Nexus Dashboard App
//!
//! Root component: wires the data store, session and hash navigation,
//! then lays out navigation, breadcrumbs, search and the content region.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{Breadcrumbs, ContentRegion, NavBar, SearchBox};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::data_store::DataStore;
use crate::router::current_location;
use crate::storage::open_storage;
use crate::store::{store_navigate, Session};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Overlay is read once here for the lifetime of the page
    let data = DataStore::new(ApiClient::new(config.api_base_url.clone()), open_storage(), &config);
    provide_context(AppContext::new(data, config));

    let session = Store::new(Session::new(current_location()));
    provide_context(session);

    // The only global listener; everything else is bound per render
    let _ = window_event_listener(ev::hashchange, move |_| {
        store_navigate(&session, current_location());
    });

    view! {
        <div class="app-layout">
            <NavBar />
            <Breadcrumbs />
            <SearchBox />
            <ContentRegion />
        </div>
    }
}
