//! Internationalization module
//!
//! This module holds the message catalog for the GeoBuddy bot: localized
//! reply templates and reply-keyboard layouts for every supported language.

pub mod loader;

// Re-export commonly used i18n components
pub use loader::{I18n, TranslationParams};
