//! Telegram command execution against the product list and the scanner.
//!
//! The same executor backs the bot and the one-shot CLI commands, so every
//! reply wording lives here.

use std::sync::Arc;

use crate::application::products::ProductService;
use crate::application::scan::DealScanner;

mod dispatch;
mod mutate;
mod render;

/// Command executor shared by the bot and the CLI.
#[derive(Clone)]
pub struct TelegramControl {
    products: Arc<ProductService>,
    scanner: Arc<DealScanner>,
    /// Entries shown by `/list` and the `/remove` not-found reply.
    list_display_limit: usize,
}

/// Default list display limit if not specified.
const DEFAULT_LIST_DISPLAY_LIMIT: usize = 10;
