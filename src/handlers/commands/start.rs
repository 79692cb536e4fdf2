//! Start command handler
//!
//! Handles the /start command: registers the user and shows the main menu

use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::handlers::reply::{send_reply, Reply};
use crate::i18n::I18n;
use crate::services::ServiceFactory;
use crate::utils::errors::{GeoBuddyError, Result};
use crate::utils::logging;

/// Build the /start reply for `user_id`, creating their preference record if needed
pub async fn start_reply(services: &ServiceFactory, i18n: &I18n, user_id: &str) -> Result<Reply> {
    let language = services.preference_service.register_or_get(user_id).await?;
    debug!(user_id = user_id, language = %language, "Greeting user");

    Ok(Reply::localized(i18n, language, "welcome").with_main_keyboard(i18n, language))
}

/// Handle /start command
pub async fn handle_start(
    bot: Bot,
    msg: Message,
    services: ServiceFactory,
    i18n: I18n,
) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        GeoBuddyError::InvalidInput("No user in message".to_string())
    })?;

    let user_id = user.id.0.to_string();
    let reply = start_reply(&services, &i18n, &user_id).await?;
    send_reply(&bot, msg.chat.id, reply).await?;

    logging::log_user_action(&user_id, "start", None);
    Ok(())
}
