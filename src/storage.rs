//! Durable key/value storage backing the session.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is not available: {0}")]
    Unavailable(String),
    #[error("unable to write {key}: {reason}")]
    Write { key: String, reason: String },
}

pub trait SessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn delete(&self, key: &str);
}

/// Non-persistent storage, e.g. for tests or non-browser targets.
///
/// Clones share their content, so a clone handed to a second session
/// behaves like the same browser storage after a reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
    fn delete(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use gloo_storage::{LocalStorage, Storage};

    use super::{SessionStorage, StorageError};

    /// `window.localStorage`
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserStorage;

    impl SessionStorage for BrowserStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            let storage = LocalStorage::raw();
            storage
                .get_item(key)
                .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
        }
        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let storage = LocalStorage::raw();
            storage
                .set_item(key, value)
                .map_err(|err| StorageError::Write {
                    key: key.to_string(),
                    reason: format!("{err:?}"),
                })
        }
        fn delete(&self, key: &str) {
            LocalStorage::delete(key);
        }
    }
}
