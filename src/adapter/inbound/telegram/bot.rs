//! Telegram long-polling loop.
//!
//! Commands are handled one message at a time per chat by teloxide's REPL. A
//! running sweep keeps that chat busy until it finishes.
//!
//! Requires the `telegram` feature to be enabled.

use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, warn};

use super::auth::{action_for_message, MessageAction};
use super::command::bot_commands;
use super::control::TelegramControl;

/// Settings for the bot loop.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Only this chat may issue commands, when set.
    pub allowed_chat_id: Option<i64>,
    /// Register the "/" command menu on startup.
    pub register_commands: bool,
}

/// Run the bot until the process receives Ctrl-C.
pub async fn run_bot(config: BotConfig, control: TelegramControl) {
    let bot = Bot::new(&config.bot_token);
    let allowed_chat = config.allowed_chat_id.map(ChatId);

    if config.register_commands {
        if let Err(e) = register_bot_commands(&bot).await {
            warn!(error = %e, "Failed to register bot commands with Telegram");
        }
    }

    info!(
        restricted = allowed_chat.is_some(),
        "Telegram command listener started"
    );

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let control = control.clone();
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            let reply = match action_for_message(text, msg.chat.id, allowed_chat) {
                MessageAction::Ignore => return respond(()),
                MessageAction::Reply(reply) => reply,
                MessageAction::Execute(command) => {
                    info!(chat_id = msg.chat.id.0, command = ?command, "Handling command");
                    if let Some(note) = control.progress_note(&command) {
                        if let Err(e) = bot.send_message(msg.chat.id, note).await {
                            warn!(error = %e, "Failed to send progress note");
                        }
                    }
                    control.execute(command).await
                }
            };

            if let Err(e) = bot.send_message(msg.chat.id, reply).await {
                error!(error = %e, "Failed to send Telegram command response");
            }

            respond(())
        }
    })
    .await;

    info!("Telegram command listener stopped");
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
