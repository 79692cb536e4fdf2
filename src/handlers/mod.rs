//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Message handlers for free text
//! - Update routing that wires both into the dispatcher
//! - Intent classification, reply rendering and failure reporting shared by both

pub mod commands;
pub mod dispatch;
pub mod errors;
pub mod intent;
pub mod messages;
pub mod reply;

// Re-export commonly used handler functions
pub use commands::{handle_command, Command};
pub use dispatch::{create_handler, handle_commands, handle_messages};
pub use errors::report_failure;
pub use intent::{Intent, MenuAction};
pub use messages::{handle_message, respond_to_text};
pub use reply::{send_reply, Reply, ReplyFormat};
