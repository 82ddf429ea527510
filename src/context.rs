//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::data_store::DataStore;
use crate::models::{NewTodo, NewUser};

pub type AppDataStore = DataStore<ApiClient>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after every overlay mutation to re-render - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after every overlay mutation to re-render - write
    set_reload_trigger: WriteSignal<u32>,
    /// Data store (not Send, so kept in local storage)
    data: StoredValue<AppDataStore, LocalStorage>,
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(data: AppDataStore, config: AppConfig) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            reload_trigger,
            set_reload_trigger,
            data: StoredValue::new_local(data),
            config: StoredValue::new(config),
        }
    }

    /// Another handle to the shared data store
    pub fn data(&self) -> AppDataStore {
        self.data.get_value()
    }

    /// Trigger a re-render of the current route
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn add_user(&self, new_user: NewUser) {
        self.data.with_value(|data| data.add_user(new_user));
        self.reload();
    }

    pub fn add_todo(&self, new_todo: NewTodo) {
        self.data.with_value(|data| data.add_todo(new_todo));
        self.reload();
    }

    pub fn delete_user(&self, user_id: u64) {
        self.data.with_value(|data| data.delete_user(user_id));
        self.reload();
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
