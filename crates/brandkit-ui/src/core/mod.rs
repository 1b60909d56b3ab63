//! Core, DOM-free primitives and operations for the personalization UI.
pub mod config;
pub mod editor;
pub mod error;
pub mod logo;
pub mod modal;
pub mod ports;
pub mod records;
pub mod saved;
pub mod setting;
pub mod store;
pub mod theme;
