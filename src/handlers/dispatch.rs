//! Update routing
//!
//! Builds the dptree handler and the endpoints it calls. Endpoints never
//! return an error to the dispatcher: failures are reported to the chat by
//! [`report_failure`] and the update is considered handled.

use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*, types::Update};

use crate::handlers::commands::{handle_command, Command};
use crate::handlers::errors::report_failure;
use crate::handlers::messages::handle_message;
use crate::i18n::I18n;
use crate::services::ServiceFactory;

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Create the main update handler
pub fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_commands)
        )
        .branch(
            // Free text only; unknown commands are not country names
            dptree::filter(|msg: Message| {
                msg.text().is_some_and(|text| !text.starts_with('/'))
            })
            .endpoint(handle_messages)
        )
}

/// Handle bot commands
pub async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: Arc<ServiceFactory>,
    i18n: Arc<I18n>,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    let user_id = msg.from.as_ref().map(|u| u.id.0.to_string());

    if let Err(e) = handle_command(bot.clone(), msg, cmd, (*services).clone(), (*i18n).clone()).await {
        report_failure(&bot, Some(chat_id), user_id.as_deref(), &services, &i18n, &e).await;
    }

    Ok(())
}

/// Handle regular text messages
pub async fn handle_messages(
    bot: Bot,
    msg: Message,
    services: Arc<ServiceFactory>,
    i18n: Arc<I18n>,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    let user_id = msg.from.as_ref().map(|u| u.id.0.to_string());

    if let Err(e) = handle_message(bot.clone(), msg, (*services).clone(), (*i18n).clone()).await {
        report_failure(&bot, Some(chat_id), user_id.as_deref(), &services, &i18n, &e).await;
    }

    Ok(())
}
