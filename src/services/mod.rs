//! Services module
//!
//! This module contains business logic services

pub mod countries;
pub mod preferences;

// Re-export commonly used services
pub use countries::CountryService;
pub use preferences::PreferenceService;

use crate::config::settings::Settings;
use crate::storage::SettingsStore;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub preference_service: PreferenceService,
    pub country_service: CountryService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        let store = SettingsStore::new(&settings.storage.settings_file);

        Ok(Self {
            preference_service: PreferenceService::new(store),
            country_service: CountryService::new(settings)?,
        })
    }
}
