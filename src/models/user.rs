//! User preference model

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use super::Language;

/// Per-user preferences, keyed by Telegram user id in the settings document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserPreference {
    pub language: Language,
}

/// Full settings document: user id string -> preferences
pub type PreferenceMap = BTreeMap<String, UserPreference>;
