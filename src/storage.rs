//! Key-Value Persistence
//!
//! String slots backing the local overlay: `localStorage` in the browser,
//! an in-memory map when that is unavailable.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[derive(Clone)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Access {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Quota errors land here
        self.storage.set_item(key, value).map_err(|e| StorageError::Access {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}

/// Non-persistent fallback; clones share the same slots
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser storage when possible, otherwise memory
pub fn open_storage() -> Rc<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            tracing::warn!("{}; local changes will not survive a reload", e);
            Rc::new(MemoryStorage::new())
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_browser_storage_round_trip() {
        let storage = BrowserStorage::open().unwrap();
        storage.set("nexusStorageTest", r#"[{"id":1}]"#).unwrap();
        assert_eq!(
            storage.get("nexusStorageTest").unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
    }
}
