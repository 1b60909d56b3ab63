//! In-memory port implementations for tests and non-browser hosts.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::core::error::StoreError;
use crate::core::ports::{KeyValueStore, Notice, Notifier, StyleHost};

/// Key-value store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    reject_writes: Cell<bool>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one raw value.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Make subsequent writes fail, mimicking an exhausted quota.
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    /// Whether `key` currently holds a value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.reject_writes.get() {
            return Err(StoreError::Write {
                key: key.to_string(),
                detail: "QuotaExceededError".to_string(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Document head holding style elements in insertion order.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    styles: RefCell<Vec<(String, String)>>,
}

impl MemoryDocument {
    /// Document with an empty head.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of the style element `id`.
    #[must_use]
    pub fn style(&self, id: &str) -> Option<String> {
        self.styles
            .borrow()
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, css)| css.clone())
    }

    /// Number of style elements in the head.
    #[must_use]
    pub fn style_count(&self) -> usize {
        self.styles.borrow().len()
    }
}

impl StyleHost for MemoryDocument {
    fn install_style(&self, id: &str, css: &str) {
        let mut styles = self.styles.borrow_mut();
        if let Some((_, content)) = styles.iter_mut().find(|(existing, _)| existing == id) {
            *content = css.to_string();
        } else {
            styles.push((id.to_string(), css.to_string()));
        }
    }
}

/// Notifier that records every notice.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl MemoryNotifier {
    /// Notifier with no recorded notices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
