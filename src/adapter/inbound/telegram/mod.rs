//! Telegram command handling.
//!
//! Parsing, execution, and reply formatting are transport-independent and
//! also back the CLI. The polling loop and chat authorization need the
//! `telegram` feature.

mod command;
mod format;

pub mod control;

#[cfg(feature = "telegram")]
mod auth;
#[cfg(feature = "telegram")]
pub mod bot;

pub use command::{bot_commands, command_help, parse_command, CommandParseError, TelegramCommand};
pub use control::TelegramControl;
pub use format::{format_check, format_stores, format_sweep};
