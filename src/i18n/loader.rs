//! Translation loader and message catalog
//!
//! This module provides the core internationalization functionality including
//! translation loading, language fallback, keyboard layouts and message formatting.

use std::collections::HashMap;
use std::path::Path;
use serde_json::{Value, Map};
use tokio::fs;
use tracing::{info, warn, debug};
use crate::utils::errors::{GeoBuddyError, Result};
use crate::config::I18nConfig;

/// Translations compiled into the binary
const EMBEDDED_TRANSLATIONS: &[(&str, &str)] = &[
    ("en", include_str!("../../translations/en.json")),
    ("ru", include_str!("../../translations/ru.json")),
];

/// Main internationalization manager
#[derive(Debug, Clone)]
pub struct I18n {
    /// Loaded translations by language code
    translations: HashMap<String, Map<String, Value>>,
    /// Default language code
    default_language: String,
    /// Supported language codes
    supported_languages: Vec<String>,
}

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

impl I18n {
    /// Create an empty I18n instance
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            translations: HashMap::new(),
            default_language: config.default_language.clone(),
            supported_languages: config.supported_languages.clone(),
        }
    }

    /// Create an I18n instance populated with the built-in translations
    pub fn embedded(config: &I18nConfig) -> Result<Self> {
        let mut i18n = Self::new(config);
        for (lang_code, content) in EMBEDDED_TRANSLATIONS {
            if i18n.is_language_supported(lang_code) {
                i18n.insert_language(lang_code, content)?;
            }
        }

        if !i18n.translations.contains_key(&i18n.default_language) {
            return Err(GeoBuddyError::Config(
                format!("No translations for default language: {}", i18n.default_language)
            ));
        }

        Ok(i18n)
    }

    /// Replace translations with `<lang>.json` files found in `dir`
    ///
    /// Languages without a file keep their current translations.
    pub async fn load_translations(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        let translations_dir = dir.as_ref();

        if !translations_dir.is_dir() {
            return Err(GeoBuddyError::Config(
                format!("Translations directory not found: {}", translations_dir.display())
            ));
        }

        let supported_languages = self.supported_languages.clone();
        for lang_code in &supported_languages {
            let file_path = translations_dir.join(format!("{}.json", lang_code));

            if file_path.exists() {
                let content = fs::read_to_string(&file_path).await?;
                self.insert_language(lang_code, &content)?;
                info!("Loaded translations for language: {}", lang_code);
            } else {
                warn!("Translation file not found: {}", file_path.display());
            }
        }

        Ok(())
    }

    /// Parse and register one language document
    fn insert_language(&mut self, lang_code: &str, content: &str) -> Result<()> {
        let translations: Value = serde_json::from_str(content)?;

        if let Value::Object(map) = translations {
            debug!("Loaded {} translation keys for {}", map.len(), lang_code);
            self.translations.insert(lang_code.to_string(), map);
        } else {
            return Err(GeoBuddyError::Config(
                format!("Invalid translation file format for {}", lang_code)
            ));
        }

        Ok(())
    }

    /// Resolve the raw template for `key`
    ///
    /// Unknown languages resolve against the default language. A key missing
    /// from the resolved language yields an empty string.
    pub fn resolve(&self, lang: &str, key: &str) -> String {
        let effective_lang = self.get_effective_language(lang);

        match self.get_translation_value(key, effective_lang) {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                warn!("Translation key '{}' is not a string in {}", key, effective_lang);
                String::new()
            }
            None => {
                warn!("Translation key '{}' not found in {}", key, effective_lang);
                String::new()
            }
        }
    }

    /// Get a translated message with `{placeholder}` parameters substituted
    pub fn t(&self, key: &str, lang: &str, params: Option<&TranslationParams>) -> String {
        let template = self.resolve(lang, key);
        self.format_message(&template, params)
    }

    /// Keyboard layout stored under `key` as rows of button labels
    pub fn keyboard(&self, lang: &str, key: &str) -> Vec<Vec<String>> {
        let effective_lang = self.get_effective_language(lang);

        let Some(Value::Array(rows)) = self.get_translation_value(key, effective_lang) else {
            warn!("Keyboard layout '{}' not found in {}", key, effective_lang);
            return Vec::new();
        };

        rows.iter()
            .filter_map(Value::as_array)
            .map(|row| {
                row.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .collect()
    }

    /// Every loaded language's string for `key`
    pub fn all_variants(&self, key: &str) -> Vec<String> {
        self.supported_languages
            .iter()
            .filter_map(|lang| self.get_translation_value(key, lang))
            .filter_map(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Check if a language is supported
    pub fn is_language_supported(&self, lang: &str) -> bool {
        self.supported_languages.iter().any(|l| l == lang)
    }

    /// Get the effective language (fallback to default if not supported)
    fn get_effective_language<'a>(&'a self, lang: &'a str) -> &'a str {
        if self.is_language_supported(lang) && self.translations.contains_key(lang) {
            lang
        } else {
            &self.default_language
        }
    }

    /// Get translation value from nested JSON structure
    fn get_translation_value(&self, key: &str, lang: &str) -> Option<&Value> {
        let translations = self.translations.get(lang)?;

        // Support nested keys like "buttons.settings"
        let mut parts = key.split('.');
        let mut current = translations.get(parts.next()?)?;
        for k in parts {
            current = current.get(k)?;
        }

        Some(current)
    }

    /// Format message with parameters
    ///
    /// The template is scanned once, so substituted values are never
    /// themselves searched for placeholders.
    fn format_message(&self, template: &str, params: Option<&TranslationParams>) -> String {
        let Some(params) = params else {
            return template.to_string();
        };

        let mut result = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            result.push_str(&rest[..open]);
            let after_open = &rest[open + 1..];
            match after_open.find(['{', '}']) {
                Some(close) if after_open[close..].starts_with('{') => {
                    // stray brace, the placeholder starts later
                    result.push('{');
                    result.push_str(&after_open[..close]);
                    rest = &after_open[close..];
                }
                Some(close) => {
                    let name = &after_open[..close];
                    match params.get(name) {
                        Some(value) => result.push_str(value),
                        None => {
                            result.push('{');
                            result.push_str(name);
                            result.push('}');
                        }
                    }
                    rest = &after_open[close + 1..];
                }
                None => {
                    rest = &rest[open..];
                    break;
                }
            }
        }
        result.push_str(rest);
        result
    }
}
