//! Handlers for CLI subcommands.

use tracing::info;

use super::command::Commands;
use super::output;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_control;
use crate::infrastructure::config::settings::Config;

/// Execute a parsed subcommand.
///
/// # Errors
///
/// Returns a configuration error when `run` is started without a bot token
/// or without Telegram support compiled in.
pub async fn execute(command: Commands, config: Config) -> Result<()> {
    let Some(bot_command) = command.as_bot_command() else {
        return run_bot(config).await;
    };

    let control = build_control(&config)?;
    output::header(env!("CARGO_PKG_VERSION"));
    if let Some(note) = control.progress_note(&bot_command) {
        output::reply(&note);
    }
    let text = control.execute(bot_command).await;
    output::reply(&text);
    Ok(())
}

#[cfg(feature = "telegram")]
async fn run_bot(config: Config) -> Result<()> {
    use crate::adapter::inbound::telegram::bot::{run_bot, BotConfig};

    let bot_config = BotConfig {
        bot_token: config.require_bot_token()?.to_string(),
        allowed_chat_id: config.telegram.allowed_chat_id,
        register_commands: config.telegram.register_commands,
    };
    let control = build_control(&config)?;

    info!(products_file = %config.products_file, "dealwatch bot starting");
    run_bot(bot_config, control).await;
    Ok(())
}

#[cfg(not(feature = "telegram"))]
async fn run_bot(config: Config) -> Result<()> {
    use crate::error::ConfigError;

    // Still fail on a missing token first so the diagnostic is the same.
    config.require_bot_token()?;
    info!("bot requested in a build without Telegram support");
    Err(ConfigError::InvalidValue {
        field: "features",
        reason: "dealwatch was built without the `telegram` feature".to_string(),
    }
    .into())
}
