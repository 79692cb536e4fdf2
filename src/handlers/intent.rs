//! User intent classification
//!
//! Maps free text to what the user wants, independent of the language the
//! reply keyboard was rendered in.

use crate::i18n::I18n;
use crate::models::Language;

/// Reply-keyboard buttons of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CountryInfo,
    Settings,
}

impl MenuAction {
    pub const ALL: [MenuAction; 2] = [MenuAction::CountryInfo, MenuAction::Settings];

    /// Catalog key holding the button label
    pub fn label_key(self) -> &'static str {
        match self {
            MenuAction::CountryInfo => "buttons.country_info",
            MenuAction::Settings => "buttons.settings",
        }
    }

    /// Match `text` against this button's label in every supported language
    pub fn matches(self, text: &str, i18n: &I18n) -> bool {
        let needle = text.to_lowercase();
        i18n.all_variants(self.label_key())
            .iter()
            .any(|label| label.to_lowercase() == needle)
    }
}

/// What an incoming text message asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ShowCountryPrompt,
    ShowSettingsPrompt,
    SetLanguage(Language),
    LookupCountry(String),
}

impl Intent {
    /// Classify a text message; priority is menu buttons, language codes, then country names
    pub fn classify(text: &str, i18n: &I18n) -> Self {
        let text = text.trim();

        if MenuAction::CountryInfo.matches(text, i18n) {
            return Intent::ShowCountryPrompt;
        }

        if MenuAction::Settings.matches(text, i18n) {
            return Intent::ShowSettingsPrompt;
        }

        if text.chars().count() == 2 {
            if let Some(language) = Language::from_code(&text.to_lowercase()) {
                return Intent::SetLanguage(language);
            }
        }

        Intent::LookupCountry(text.to_string())
    }
}
