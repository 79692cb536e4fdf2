//! Preference service implementation
//!
//! This service handles first-contact registration and language preferences
//! on top of the settings store.

use tracing::{info, debug};
use crate::models::Language;
use crate::storage::SettingsStore;
use crate::utils::errors::Result;

/// Service for managing user preferences
#[derive(Clone, Debug)]
pub struct PreferenceService {
    store: SettingsStore,
}

impl PreferenceService {
    /// Create a new PreferenceService instance
    pub fn new(store: SettingsStore) -> Self {
        Self { store }
    }

    /// Register a user on first contact and return their language
    pub async fn register_or_get(&self, user_id: &str) -> Result<Language> {
        debug!(user_id = user_id, "Registering or getting user preferences");
        self.store.ensure_user(user_id).await
    }

    /// Current language of a user, `en` when they never registered
    pub async fn language(&self, user_id: &str) -> Result<Language> {
        self.store.language_of(user_id).await
    }

    /// Change a user's language
    pub async fn update_language(&self, user_id: &str, language: Language) -> Result<()> {
        self.store.set_language(user_id, language).await?;
        info!(user_id = user_id, language = %language, "User language updated");
        Ok(())
    }
}
