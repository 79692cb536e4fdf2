//! GeoBuddy Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use teloxide::prelude::*;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::utils::command::BotCommands as _;
use tracing::{info, warn};

use GeoBuddy::{
    config::Settings,
    utils::logging,
    services::ServiceFactory,
    i18n::I18n,
    handlers::{create_handler, Command},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate().context("invalid configuration")?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {} Telegram Bot...", GeoBuddy::info());

    // Initialize i18n system
    info!("Loading translations...");
    let mut i18n = I18n::embedded(&settings.i18n)?;
    if let Some(dir) = &settings.i18n.translations_dir {
        i18n.load_translations(dir)
            .await
            .with_context(|| format!("failed to load translations from {}", dir))?;
    }

    // Initialize bot
    let mut bot = Bot::new(&settings.bot.token);
    if let Some(api_url) = &settings.bot.api_url {
        bot = bot.set_api_url(api_url.parse()?);
    }

    // Initialize services
    info!(settings_file = %settings.storage.settings_file, "Initializing services...");
    let services = ServiceFactory::new(&settings)?;

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let services_arc = Arc::new(services);
    let i18n_arc = Arc::new(i18n);

    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![services_arc, i18n_arc])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.kind);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build();

    info!("GeoBuddy bot is ready, starting polling...");
    dispatcher.dispatch().await;

    info!("GeoBuddy bot has been shut down.");

    Ok(())
}
