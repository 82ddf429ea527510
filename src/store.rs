//! Session State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::router::Location;

/// UI state for the lifetime of the page; not persisted across reloads
#[derive(Clone, Debug, Default, Store)]
pub struct Session {
    /// Parsed address fragment
    pub location: Location,
    /// Lowercased search term, empty when not searching
    pub search: String,
}

impl Session {
    pub fn new(location: Location) -> Self {
        Self { location, ..Default::default() }
    }
}

/// Type alias for the store
pub type SessionStore = Store<Session>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record a navigation (ignored if the fragment did not change)
pub fn store_navigate(store: &SessionStore, location: Location) {
    if store.location().with_untracked(|current| *current != location) {
        tracing::debug!("Navigating to #{}", location.path);
        *store.location().write() = location;
    }
}

/// Apply a search term as typed
pub fn store_set_search(store: &SessionStore, term: &str) {
    let term = term.to_lowercase();
    if store.search().with_untracked(|current| *current != term) {
        *store.search().write() = term;
    }
}
