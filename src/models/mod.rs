//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod country;
pub mod language;
pub mod user;

// Re-export commonly used models
pub use country::{CountryRecord, MISSING_FIELD};
pub use language::Language;
pub use user::{UserPreference, PreferenceMap};
