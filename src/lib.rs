//! GeoBuddy Telegram Bot
//!
//! A Telegram bot that answers country information queries using the
//! REST Countries API, replying in each user's preferred language.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod storage;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{GeoBuddyError, CountryError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use storage::SettingsStore;
pub use i18n::I18n;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
