//! Feature slices of the Web UI.
pub(crate) mod personalization;
