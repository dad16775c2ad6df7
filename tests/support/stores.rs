use std::path::Path;
use std::sync::Arc;

use dealwatch::adapter::inbound::telegram::TelegramControl;
use dealwatch::adapter::outbound::html::HtmlDealExtractor;
use dealwatch::adapter::outbound::http::HttpPageFetcher;
use dealwatch::adapter::outbound::json_file::JsonFileStore;
use dealwatch::application::products::ProductService;
use dealwatch::application::scan::DealScanner;
use dealwatch::domain::{Catalog, StoreEntry};
use dealwatch::infrastructure::config::scan::ScanConfig;
use httpmock::MockServer;

/// Catalog with one store per path on the mock server, labelled "Store N".
pub fn mock_catalog(server: &MockServer, paths: &[&str]) -> Catalog {
    let entries = paths
        .iter()
        .enumerate()
        .map(|(i, path)| StoreEntry::new(format!("Store {}", i + 1), server.url(*path)))
        .collect();
    Catalog::new(entries).expect("at least one store")
}

/// Executor wired to real adapters: JSON file list, reqwest, scraper.
pub fn control(products_file: &Path, catalog: Catalog, scan: ScanConfig) -> TelegramControl {
    let products = Arc::new(ProductService::new(Arc::new(JsonFileStore::new(
        products_file,
    ))));
    let scanner = Arc::new(DealScanner::new(
        Arc::new(HttpPageFetcher::browser().expect("http client")),
        Arc::new(HtmlDealExtractor::new()),
        catalog,
        scan,
    ));
    TelegramControl::new(products, scanner)
}
