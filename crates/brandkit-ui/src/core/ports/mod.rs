//! Boundaries between personalization logic and the browser.
//!
//! # Design
//! - Storage, the document head, and notifications are injected, never global.
//! - Browser adapters live in the wasm-only `app` module.
//! - [`memory`] provides in-process doubles for native tests.

use crate::core::config::PersonalizationConfig;
use crate::core::error::StoreError;

pub mod memory;

/// Synchronous string-valued key-value store (browser local storage).
pub trait KeyValueStore {
    /// Raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when the backing store rejects the value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`; missing keys are ignored.
    fn remove(&self, key: &str);
}

/// Document style mechanism holding uniquely identified style elements.
pub trait StyleHost {
    /// Create the style element `id` if needed and replace its content with `css`.
    fn install_style(&self, id: &str, css: &str);
}

/// Fire-and-forget transient notification sink.
pub trait Notifier {
    /// Display `notice`; delivery is best effort.
    fn notify(&self, notice: Notice);
}

/// Horizontal placement of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticePosition {
    /// Leading edge.
    Start,
    /// Centered.
    Center,
    /// Trailing edge.
    End,
}

impl NoticePosition {
    /// CSS modifier used by the toast host.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Start => "toast-start",
            Self::Center => "toast-center",
            Self::End => "toast-end",
        }
    }
}

/// Transient message shown after an action completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Text shown to the user.
    pub message: String,
    /// Label of the dismiss action.
    pub action: String,
    /// How long the notice stays visible.
    pub duration_ms: u32,
    /// Placement override; `None` uses the host default.
    pub position: Option<NoticePosition>,
}

/// Everything an editor or list operation needs from its surroundings.
#[derive(Clone, Copy)]
pub struct Services<'a> {
    /// Persistent key-value store.
    pub store: &'a dyn KeyValueStore,
    /// Document style host used for theme injection.
    pub styles: &'a dyn StyleHost,
    /// Notification sink.
    pub notifier: &'a dyn Notifier,
    /// Keys, identifiers and notice texts.
    pub config: &'a PersonalizationConfig,
}
