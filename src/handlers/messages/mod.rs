//! Message handlers module
//!
//! Handles incoming text messages: menu buttons, language changes and
//! country lookups.

use teloxide::{Bot, types::Message};
use teloxide::utils::html;
use tracing::debug;
use crate::handlers::intent::Intent;
use crate::handlers::reply::{send_reply, Reply};
use crate::i18n::{I18n, TranslationParams};
use crate::models::{CountryRecord, Language};
use crate::services::ServiceFactory;
use crate::utils::errors::{CountryError, GeoBuddyError, Result};
use crate::utils::logging;

/// Handle incoming text messages
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    services: ServiceFactory,
    i18n: I18n,
) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        GeoBuddyError::InvalidInput("No user in message".to_string())
    })?;

    let Some(text) = msg.text() else {
        debug!(chat_id = ?msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    let user_id = user.id.0.to_string();
    debug!(user_id = %user_id, chat_id = ?msg.chat.id, "Processing message");

    let reply = respond_to_text(&services, &i18n, &user_id, text).await?;
    send_reply(&bot, msg.chat.id, reply).await
}

/// Decide how to answer `text` from `user_id`
///
/// Lookup failures are answered with a localized message; only storage
/// errors propagate.
pub async fn respond_to_text(
    services: &ServiceFactory,
    i18n: &I18n,
    user_id: &str,
    text: &str,
) -> Result<Reply> {
    let language = services.preference_service.language(user_id).await?;

    match Intent::classify(text, i18n) {
        Intent::ShowCountryPrompt => Ok(Reply::localized(i18n, language, "enter_country_name")),
        Intent::ShowSettingsPrompt => Ok(Reply::localized(i18n, language, "enter_language")),
        Intent::SetLanguage(new_language) => {
            services.preference_service.update_language(user_id, new_language).await?;
            logging::log_user_action(user_id, "set_language", Some(new_language.code()));

            Ok(Reply::localized(i18n, new_language, "language_set")
                .with_main_keyboard(i18n, new_language))
        }
        Intent::LookupCountry(name) => Ok(country_reply(services, i18n, language, user_id, &name).await),
    }
}

async fn country_reply(
    services: &ServiceFactory,
    i18n: &I18n,
    language: Language,
    user_id: &str,
    name: &str,
) -> Reply {
    match services.country_service.lookup(name).await {
        Ok(record) => {
            logging::log_user_action(user_id, "country_lookup", Some(&record.name));
            Reply::html(format_country(i18n, language, &record))
        }
        Err(CountryError::NotFound(_)) => {
            logging::log_lookup_miss(user_id, name);
            Reply::localized(i18n, language, "country_not_found")
        }
        Err(e @ CountryError::LookupFailed(_)) => {
            logging::log_api_error("restcountries", &e.to_string(), Some(name));
            Reply::localized(i18n, language, "error_occurred")
        }
    }
}

/// Render the country-info template with HTML-escaped field values
pub fn format_country(i18n: &I18n, language: Language, record: &CountryRecord) -> String {
    let params: TranslationParams = [
        ("name", &record.name),
        ("capital", &record.capital),
        ("region", &record.region),
        ("population", &record.population),
        ("languages", &record.languages),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), html::escape(value)))
    .collect();

    i18n.t("country_info_response", language.code(), Some(&params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::I18nConfig;

    #[test]
    fn test_format_country_escapes_values() {
        let i18n = I18n::embedded(&I18nConfig {
            default_language: "en".to_string(),
            supported_languages: vec!["en".to_string(), "ru".to_string()],
            translations_dir: None,
        })
        .unwrap();
        let record = CountryRecord {
            name: "Bosnia & Herzegovina".to_string(),
            capital: "Sarajevo".to_string(),
            region: "Europe".to_string(),
            population: "3280815".to_string(),
            languages: "Bosnian, Croatian, Serbian".to_string(),
        };

        let text = format_country(&i18n, Language::En, &record);
        assert!(text.starts_with("<b>Country:</b> Bosnia &amp; Herzegovina\n"));
        assert!(text.contains("<b>Capital:</b> Sarajevo"));
        assert!(text.ends_with("<b>Languages:</b> Bosnian, Croatian, Serbian"));

        let text = format_country(&i18n, Language::Ru, &record);
        assert!(text.contains("<b>Столица:</b> Sarajevo"));
    }
}
