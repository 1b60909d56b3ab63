//! Personalization feature slice.
//!
//! # Design
//! - Views stay thin: every state change goes through `core::editor` or `core::saved`.
//! - Browser ports are built per action from the shared store dispatch.

pub(crate) mod saved_view;
pub(crate) mod view;
