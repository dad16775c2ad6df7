//! Dealwatch - grocery deal alerts for a personal shopping list.
//!
//! A Telegram bot keeps a list of products and checks Swedish grocery
//! promotion pages for them. Pages are fetched over HTTP, short promo-looking
//! text fragments are pulled out of the markup, and any listed product that
//! appears inside a fragment is reported as a deal.
//!
//! # Architecture
//!
//! - [`domain`] - Product list, store catalog, extraction rules, matching
//! - [`port`] - Traits for page fetching, deal extraction, and list storage
//! - [`adapter`] - HTTP fetcher, HTML extractor, JSON file store, Telegram
//!   bot and CLI
//! - [`application`] - Product list service and the deal scanner
//! - [`infrastructure`] - Configuration, logging, and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Long-polling Telegram bot
//!
//! # Example
//!
//! ```no_run
//! use dealwatch::adapter::inbound::telegram::TelegramCommand;
//! use dealwatch::infrastructure::bootstrap::build_control;
//! use dealwatch::infrastructure::config::settings::Config;
//!
//! # async fn demo() -> dealwatch::error::Result<()> {
//! let config = Config::load_or_default("config.toml")?;
//! let control = build_control(&config)?;
//! println!("{}", control.execute(TelegramCommand::Check).await);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
