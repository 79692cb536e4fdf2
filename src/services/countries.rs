//! Countries API service implementation
//!
//! This service queries the REST Countries API by country name and extracts
//! the handful of fields the bot reports back to users.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use crate::config::settings::Settings;
use crate::models::{CountryRecord, MISSING_FIELD};
use crate::utils::errors::{CountryError, CountryResult, GeoBuddyError, Result};

/// Country object as returned by `/v3.1/name/{name}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiCountry {
    #[serde(default)]
    pub name: Option<ApiCountryName>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub languages: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiCountryName {
    #[serde(default)]
    pub common: Option<String>,
}

impl From<ApiCountry> for CountryRecord {
    fn from(country: ApiCountry) -> Self {
        let or_missing = |value: Option<String>| {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| MISSING_FIELD.to_string())
        };

        let languages = country
            .languages
            .map(|langs| {
                langs
                    .values()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            });

        CountryRecord {
            name: or_missing(country.name.and_then(|n| n.common)),
            capital: or_missing(country.capital.and_then(|c| c.into_iter().next())),
            region: or_missing(country.region),
            population: or_missing(country.population.map(|p| p.to_string())),
            languages: or_missing(languages),
        }
    }
}

/// Client for the countries data source
#[derive(Clone, Debug)]
pub struct CountryService {
    client: Client,
    api_url: String,
}

impl CountryService {
    /// Create a new CountryService instance
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.countries.user_agent.clone())
            .build()
            .map_err(GeoBuddyError::Http)?;

        Ok(Self {
            client,
            api_url: settings.countries.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up a country by name, using the first match
    pub async fn lookup(&self, name: &str) -> CountryResult<CountryRecord> {
        let url = format!("{}/v3.1/name/{}", self.api_url, urlencoding::encode(name));

        debug!(country = name, url = %url, "Making countries API request");

        let response = self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| CountryError::LookupFailed(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            debug!(country = name, status = %status, "No country matched");
            return Err(CountryError::NotFound(name.to_string()));
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(country = name, status = %status, "Countries API request failed");
            return Err(CountryError::LookupFailed(
                format!("HTTP {}: {}", status, error_text)
            ));
        }

        let candidates: Vec<ApiCountry> = response
            .json()
            .await
            .map_err(|e| CountryError::LookupFailed(format!("Invalid response: {}", e)))?;

        let first = candidates
            .into_iter()
            .next()
            .ok_or_else(|| CountryError::LookupFailed("Empty response".to_string()))?;

        Ok(first.into())
    }
}
