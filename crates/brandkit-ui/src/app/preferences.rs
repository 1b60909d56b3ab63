//! Browser local storage adapter.

use crate::core::error::StoreError;
use crate::core::ports::KeyValueStore;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

use super::js_detail;

/// [`KeyValueStore`] over `window.localStorage`, values stored verbatim.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log_storage_error("get", key, &js_detail(&err));
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw().set_item(key, value).map_err(|err| {
            let detail = js_detail(&err);
            log_storage_error("set", key, &detail);
            StoreError::Write {
                key: key.to_string(),
                detail,
            }
        })
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
