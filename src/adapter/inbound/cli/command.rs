//! Command-line interface definitions.
//!
//! Defines the CLI structure for dealwatch using `clap`. `run` starts the
//! Telegram bot; the other subcommands execute one bot command locally and
//! print the reply.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::adapter::inbound::telegram::TelegramCommand;

/// Grocery deal watcher for your shopping list
#[derive(Parser, Debug)]
#[command(name = "dealwatch")]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands. Defaults to `run`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the Telegram bot (foreground)
    Run,
    /// Check the primary store once
    Check,
    /// Check every store once
    Sweep,
    /// List the watched stores
    Stores,
    /// Show the product list
    List,
    /// Add comma-separated products
    Add {
        /// Products, e.g. "mjölk,bröd"
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        products: Vec<String>,
    },
    /// Remove one product
    Remove {
        /// Product name
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        product: Vec<String>,
    },
    /// Delete the product list
    Clear,
}

impl Commands {
    /// The bot command this subcommand mirrors, if any.
    #[must_use]
    pub fn as_bot_command(&self) -> Option<TelegramCommand> {
        match self {
            Self::Run => None,
            Self::Check => Some(TelegramCommand::Check),
            Self::Sweep => Some(TelegramCommand::CheckAll),
            Self::Stores => Some(TelegramCommand::Stores),
            Self::List => Some(TelegramCommand::List),
            Self::Add { products } => Some(TelegramCommand::AddList(products.join(" "))),
            Self::Remove { product } => Some(TelegramCommand::Remove(product.join(" "))),
            Self::Clear => Some(TelegramCommand::Clear),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["dealwatch"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("config.toml"));
    }

    #[test]
    fn sweep_maps_to_check_all() {
        let cli = Cli::try_parse_from(["dealwatch", "sweep"]).unwrap();
        assert_eq!(
            cli.command.and_then(|c| c.as_bot_command()),
            Some(TelegramCommand::CheckAll)
        );
    }

    #[test]
    fn add_joins_words() {
        let cli = Cli::try_parse_from(["dealwatch", "add", "mjölk,", "grekisk", "yoghurt"]).unwrap();
        assert_eq!(
            cli.command.and_then(|c| c.as_bot_command()),
            Some(TelegramCommand::AddList("mjölk, grekisk yoghurt".into()))
        );
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["dealwatch", "list", "--config", "/etc/dw.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("/etc/dw.toml"));
        assert_eq!(cli.command, Some(Commands::List));
    }

    #[test]
    fn remove_requires_a_product() {
        assert!(Cli::try_parse_from(["dealwatch", "remove"]).is_err());
    }

    #[test]
    fn add_requires_products() {
        let err = Cli::try_parse_from(["dealwatch", "add"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
