//! Outgoing replies
//!
//! Handlers describe their answer as a [`Reply`]; [`send_reply`] is the only
//! place that turns one into a Telegram request.

use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup, ParseMode};
use crate::i18n::I18n;
use crate::models::Language;
use crate::utils::errors::Result;

/// Catalog key of the main menu layout
pub const MAIN_KEYBOARD: &str = "keyboard.main";

/// How the reply text is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplyFormat {
    #[default]
    Plain,
    Html,
}

/// A message to send back to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub format: ReplyFormat,
    /// Reply-keyboard rows; `None` leaves the current keyboard untouched
    pub keyboard: Option<Vec<Vec<String>>>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: ReplyFormat::Plain,
            keyboard: None,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            format: ReplyFormat::Html,
            ..Self::text(text)
        }
    }

    /// Catalog message `key` in `language`
    pub fn localized(i18n: &I18n, language: Language, key: &str) -> Self {
        Self::text(i18n.t(key, language.code(), None))
    }

    /// Attach the main menu keyboard in `language`
    pub fn with_main_keyboard(mut self, i18n: &I18n, language: Language) -> Self {
        self.keyboard = Some(i18n.keyboard(language.code(), MAIN_KEYBOARD));
        self
    }
}

/// Build a one-time, resized reply keyboard from label rows
pub fn build_keyboard(rows: &[Vec<String>]) -> KeyboardMarkup {
    let buttons = rows
        .iter()
        .map(|row| row.iter().map(KeyboardButton::new).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    KeyboardMarkup::new(buttons)
        .resize_keyboard()
        .one_time_keyboard()
}

/// Send `reply` to `chat_id`
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> Result<()> {
    let mut request = bot.send_message(chat_id, reply.text);

    if reply.format == ReplyFormat::Html {
        request = request.parse_mode(ParseMode::Html);
    }

    if let Some(rows) = reply.keyboard.as_deref() {
        request = request.reply_markup(build_keyboard(rows));
    }

    request.await?;
    Ok(())
}
