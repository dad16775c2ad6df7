//! Telegram bot configuration.

use serde::Deserialize;

/// Environment variable holding the bot token.
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
/// Shorter alias accepted for the bot token.
pub const BOT_TOKEN_ENV_ALIAS: &str = "BOT_TOKEN";
/// Environment variable restricting the bot to one chat.
pub const CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

/// Telegram bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Bot API token. Loaded from the environment only, never from the file.
    #[serde(skip)]
    pub bot_token: Option<String>,
    /// When set, messages from any other chat are ignored.
    #[serde(default)]
    pub allowed_chat_id: Option<i64>,
    /// Entries shown by `/list` and in the `/remove` not-found reply (default: 10).
    #[serde(default = "default_list_display_limit")]
    pub list_display_limit: usize,
    /// Register the command menu with Telegram on startup.
    #[serde(default = "default_true")]
    pub register_commands: bool,
}

const fn default_list_display_limit() -> usize {
    10
}

const fn default_true() -> bool {
    true
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            allowed_chat_id: None,
            list_display_limit: default_list_display_limit(),
            register_commands: default_true(),
        }
    }
}
