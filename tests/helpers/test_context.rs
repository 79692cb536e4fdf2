//! Test context for setting up test environments
//!
//! Wires a temporary settings file and a mock countries API into the
//! services the handlers use.

use std::path::PathBuf;
use std::sync::Once;
use GeoBuddy::{I18n, ServiceFactory, Settings};
use super::countries_mock::CountriesMockServer;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Everything a handler test needs
pub struct TestContext {
    pub temp_dir: tempfile::TempDir,
    pub countries: CountriesMockServer,
    pub settings: Settings,
    pub services: ServiceFactory,
    pub i18n: I18n,
}

impl TestContext {
    /// Create a new test context with an empty settings file location
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        init_test_env();

        let temp_dir = tempfile::tempdir()?;
        let countries = CountriesMockServer::new().await;

        let mut settings = Settings::default();
        settings.bot.token = super::telegram_mock::test_bot_token().to_string();
        settings.countries.api_url = countries.uri();
        settings.storage.settings_file = temp_dir
            .path()
            .join("user_settings.json")
            .to_string_lossy()
            .into_owned();
        settings.validate()?;

        let services = ServiceFactory::new(&settings)?;
        let i18n = I18n::embedded(&settings.i18n)?;

        Ok(Self {
            temp_dir,
            countries,
            settings,
            services,
            i18n,
        })
    }

    /// Path of the settings document used by this context
    pub fn settings_path(&self) -> PathBuf {
        PathBuf::from(&self.settings.storage.settings_file)
    }

    /// Fresh services over the same files, as after a process restart
    pub fn restarted_services(&self) -> ServiceFactory {
        ServiceFactory::new(&self.settings).expect("services rebuild from valid settings")
    }

    /// Raw settings document as JSON
    pub fn settings_document(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.settings_path()).expect("settings file exists");
        serde_json::from_str(&content).expect("settings file is valid JSON")
    }
}
