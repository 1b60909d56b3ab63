//! Typed request/response values for views opened as modals.
//!
//! # Design
//! - A modal receives a [`ModalRequest`] and reports exactly one [`ModalClose`].
//! - The host decides rendering; these values carry no toolkit types.

use crate::core::setting::Setting;

/// Pass-through context handed to a modal when it opens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalRequest<C> {
    /// Context supplied by the opener.
    pub context: C,
}

impl<C> ModalRequest<C> {
    /// Wrap `context` into a request.
    #[must_use]
    pub const fn new(context: C) -> Self {
        Self { context }
    }
}

/// Value a modal reports when it closes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalClose<T> {
    /// Closed without a result payload.
    Empty,
    /// Closed returning a result.
    With(T),
}

impl<T> ModalClose<T> {
    /// Result payload, if any.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Empty => None,
            Self::With(value) => Some(value),
        }
    }

    /// Whether the modal closed without a payload.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Context the editor hands to the saved-settings list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedListContext {
    /// The editor's unsaved form values.
    pub current: Setting,
}

/// Result of choosing a preset in the saved-settings list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedPreset {
    /// The preset that was written as the active record.
    pub settings: Setting,
}
