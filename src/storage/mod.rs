//! Persistence module
//!
//! This module stores per-user preferences in a flat JSON document.

pub mod settings_store;

pub use settings_store::SettingsStore;
