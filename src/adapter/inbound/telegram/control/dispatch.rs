use std::sync::Arc;

use tracing::error;

use crate::application::products::ProductService;
use crate::application::scan::{error_excerpt, DealScanner};
use crate::error::Error;

use super::super::command::{command_help, TelegramCommand};
use super::{TelegramControl, DEFAULT_LIST_DISPLAY_LIMIT};

impl TelegramControl {
    /// Create a control with the default list display limit.
    #[must_use]
    pub fn new(products: Arc<ProductService>, scanner: Arc<DealScanner>) -> Self {
        Self::with_config(products, scanner, DEFAULT_LIST_DISPLAY_LIMIT)
    }

    /// Create a control with a custom list display limit.
    #[must_use]
    pub fn with_config(
        products: Arc<ProductService>,
        scanner: Arc<DealScanner>,
        list_display_limit: usize,
    ) -> Self {
        Self {
            products,
            scanner,
            list_display_limit,
        }
    }

    /// Execute one parsed command and return response text.
    pub async fn execute(&self, command: TelegramCommand) -> String {
        match command {
            TelegramCommand::Start | TelegramCommand::Help => command_help().to_string(),
            TelegramCommand::AddList(args) => self.add_text(&args),
            TelegramCommand::List => self.list_text(),
            TelegramCommand::Check => self.check_text().await,
            TelegramCommand::CheckAll => self.check_all_text().await,
            TelegramCommand::Remove(args) => self.remove_text(&args),
            TelegramCommand::Clear => self.clear_text(),
            TelegramCommand::Stores => self.stores_text(),
        }
    }

    /// Short note to send before a slow command starts.
    ///
    /// Only scans get one, and only when there is a list to scan for.
    #[must_use]
    pub fn progress_note(&self, command: &TelegramCommand) -> Option<String> {
        let note = match command {
            TelegramCommand::Check => {
                format!("🔍 Checking {}...", self.scanner.catalog().primary().label())
            }
            TelegramCommand::CheckAll => {
                format!("🔍 Checking {} stores...", self.scanner.catalog().len())
            }
            _ => return None,
        };

        match self.products.list() {
            Ok(Some(_)) => Some(note),
            _ => None,
        }
    }

    pub(super) fn storage_error_text(&self, action: &str, err: &Error) -> String {
        error!(action, error = %err, "Product list storage failed");
        format!(
            "❌ Could not {action}: {}",
            error_excerpt(&err.to_string(), self.scanner.config().error_excerpt_chars)
        )
    }
}
