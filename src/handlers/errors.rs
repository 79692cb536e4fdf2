//! Failure reporting for dispatcher endpoints
//!
//! Logs a failed update and, when the update came from a chat, tells the
//! user something went wrong in their own language.

use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::{error, warn};
use crate::handlers::reply::{send_reply, Reply};
use crate::i18n::I18n;
use crate::models::Language;
use crate::services::ServiceFactory;
use crate::utils::errors::{ErrorSeverity, GeoBuddyError};

/// Log `err` and send the localized generic error message to `chat_id`
pub async fn report_failure(
    bot: &Bot,
    chat_id: Option<ChatId>,
    user_id: Option<&str>,
    services: &ServiceFactory,
    i18n: &I18n,
    err: &GeoBuddyError,
) {
    match err.severity() {
        ErrorSeverity::Info => {
            warn!(user_id = user_id, error = %err, "Update handling failed");
        }
        ErrorSeverity::Error | ErrorSeverity::Critical => {
            error!(
                user_id = user_id,
                error = ?err,
                severity = %err.severity(),
                recoverable = err.is_recoverable(),
                "Update handling failed"
            );
        }
    }

    let Some(chat_id) = chat_id else {
        return;
    };

    let reply = Reply::localized(i18n, failure_language(services, user_id).await, "error_occurred");
    if let Err(e) = send_reply(bot, chat_id, reply).await {
        error!(chat_id = ?chat_id, error = %e, "Failed to report error to user");
    }
}

/// Language for the error message; the store itself may be what failed
async fn failure_language(services: &ServiceFactory, user_id: Option<&str>) -> Language {
    let Some(user_id) = user_id else {
        return Language::default();
    };

    match services.preference_service.language(user_id).await {
        Ok(language) => language,
        Err(e) => {
            warn!(user_id = user_id, error = %e, "Falling back to default language for error message");
            Language::default()
        }
    }
}
