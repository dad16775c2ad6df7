//! Authorization for Telegram command handling.

use teloxide::types::ChatId;
use tracing::warn;

use super::command::{command_help, parse_command, CommandParseError, TelegramCommand};

/// What the bot should do with an incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageAction {
    /// Execute the command and reply.
    Execute(TelegramCommand),
    /// Reply with a fixed text without executing anything.
    Reply(String),
    /// Stay silent.
    Ignore,
}

/// Decide how to handle a message text from `incoming_chat`.
///
/// Returns [`MessageAction::Ignore`] for:
/// - Messages from unauthorized chats (when a chat restriction is set)
/// - Messages that are not commands (don't start with `/`)
///
/// Unknown commands get an error line followed by the help text.
pub fn action_for_message(
    text: &str,
    incoming_chat: ChatId,
    allowed_chat: Option<ChatId>,
) -> MessageAction {
    if !is_authorized_chat(incoming_chat, allowed_chat) {
        return MessageAction::Ignore;
    }

    match parse_command(text) {
        Ok(command) => MessageAction::Execute(command),
        Err(CommandParseError::NotACommand) => MessageAction::Ignore,
        Err(err) => MessageAction::Reply(format!("Invalid command: {err}\n\n{}", command_help())),
    }
}

/// Check if a chat is authorized to send commands.
fn is_authorized_chat(incoming_chat: ChatId, allowed_chat: Option<ChatId>) -> bool {
    match allowed_chat {
        None => true,
        Some(allowed) if allowed == incoming_chat => true,
        Some(_) => {
            warn!(
                chat_id = incoming_chat.0,
                "Ignoring Telegram message from unauthorized chat"
            );
            false
        }
    }
}
