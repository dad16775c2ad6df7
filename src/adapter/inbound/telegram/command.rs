//! Telegram command parsing.

/// Supported Telegram commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelegramCommand {
    Start,
    Help,
    /// Comma-separated product names; may be empty.
    AddList(String),
    List,
    Check,
    CheckAll,
    /// A single product name, possibly with spaces; may be empty.
    Remove(String),
    Clear,
    Stores,
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
///
/// Arguments are re-joined with single spaces, so `/remove  ica   ost`
/// targets `ica ost`.
pub fn parse_command(text: &str) -> Result<TelegramCommand, CommandParseError> {
    let mut parts = text.split_whitespace();
    let Some(raw_command) = parts.next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);
    let args = || parts.collect::<Vec<_>>().join(" ");

    match command {
        "/start" => Ok(TelegramCommand::Start),
        "/help" => Ok(TelegramCommand::Help),
        "/add_list" => Ok(TelegramCommand::AddList(args())),
        "/list" => Ok(TelegramCommand::List),
        "/check" => Ok(TelegramCommand::Check),
        "/check_all" => Ok(TelegramCommand::CheckAll),
        "/remove" => Ok(TelegramCommand::Remove(args())),
        "/clear" => Ok(TelegramCommand::Clear),
        "/stores" => Ok(TelegramCommand::Stores),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Help text returned by `/start` and `/help`.
#[must_use]
pub const fn command_help() -> &'static str {
    "✅ Deal hunter ready!\n\n\
    /add_list mjölk,bröd - 📝 Add products\n\
    /list - 📋 Show your list\n\
    /remove <product> - 🗑️ Remove a product\n\
    /clear - 🧹 Clear the list\n\
    /stores - 🛒 Watched stores\n\
    /check - 🔍 Check the primary store\n\
    /check_all - 🏆 Check every store"
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("add_list", "Add comma-separated products"),
        ("list", "Show your product list"),
        ("remove", "Remove one product"),
        ("clear", "Clear the product list"),
        ("stores", "List watched stores"),
        ("check", "Check the primary store"),
        ("check_all", "Check every store"),
        ("help", "Show all commands"),
    ]
}
