//! Composition root: builds the product service, scanner, and command
//! executor from configuration.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::inbound::telegram::TelegramControl;
use crate::adapter::outbound::html::HtmlDealExtractor;
use crate::adapter::outbound::http::HttpPageFetcher;
use crate::adapter::outbound::json_file::JsonFileStore;
use crate::application::products::ProductService;
use crate::application::scan::DealScanner;
use crate::domain::Catalog;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Build the product service backed by the configured JSON file.
#[must_use]
pub fn build_product_service(config: &Config) -> Arc<ProductService> {
    let store = Arc::new(JsonFileStore::new(&config.products_file));
    Arc::new(ProductService::new(store))
}

/// Build the deal scanner over the default store catalog.
///
/// # Errors
///
/// Returns a configuration error if the HTTP client cannot be built from
/// the configured user agent.
pub fn build_scanner(config: &Config) -> Result<Arc<DealScanner>> {
    let fetcher = Arc::new(HttpPageFetcher::new(&config.scan.user_agent)?);
    let extractor = Arc::new(HtmlDealExtractor::new());
    Ok(Arc::new(DealScanner::new(
        fetcher,
        extractor,
        Catalog::default(),
        config.scan.clone(),
    )))
}

/// Build the command executor shared by the bot and the CLI.
///
/// # Errors
///
/// See [`build_scanner`].
pub fn build_control(config: &Config) -> Result<TelegramControl> {
    debug!(
        products_file = %config.products_file,
        list_display_limit = config.telegram.list_display_limit,
        "Wiring command executor"
    );
    Ok(TelegramControl::with_config(
        build_product_service(config),
        build_scanner(config)?,
        config.telegram.list_display_limit,
    ))
}
