//! Country model

use serde::Serialize;

/// Placeholder for fields the countries API does not provide
pub const MISSING_FIELD: &str = "N/A";

/// Country facts extracted from the first lookup result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRecord {
    pub name: String,
    pub capital: String,
    pub region: String,
    pub population: String,
    pub languages: String,
}
