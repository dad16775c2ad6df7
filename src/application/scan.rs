//! Deal scans: the single-store check and the catalog sweep.
//!
//! Both scans are stateless. The sweep visits stores strictly one after
//! another and pauses after each store, whether it succeeded or not. A
//! failing store is logged and skipped; it never aborts the sweep.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::domain::{
    match_products, Catalog, CheckOutcome, ExtractRules, ProductList, StoreEntry, StoreMatches,
    SweepReport,
};
use crate::error::FetchError;
use crate::infrastructure::config::scan::ScanConfig;
use crate::port::{DealExtractor, PageFetcher};

/// First `max_chars` characters of an error message.
#[must_use]
pub fn error_excerpt(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}

/// Runs scans against the store catalog.
pub struct DealScanner {
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn DealExtractor>,
    catalog: Catalog,
    config: ScanConfig,
}

impl DealScanner {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        extractor: Arc<dyn DealExtractor>,
        catalog: Catalog,
        config: ScanConfig,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            catalog,
            config,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Fetch one store page and match its deals against `products`.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] if the page cannot be retrieved.
    pub async fn scan_store(
        &self,
        store: &StoreEntry,
        products: &ProductList,
        rules: &ExtractRules,
        timeout: Duration,
    ) -> Result<Vec<String>, FetchError> {
        let markup = self.fetcher.fetch(store.url(), timeout).await?;
        let deals = self.extractor.extract_candidate_texts(&markup, rules);
        Ok(match_products(products.items(), &deals))
    }

    /// Check the primary store against the whole list.
    ///
    /// Failures are folded into [`CheckOutcome::Failed`] with a short
    /// excerpt of the error.
    pub async fn check(&self, products: &ProductList) -> CheckOutcome {
        let store = self.catalog.primary();
        let rules = self.config.check_rules();

        match self
            .scan_store(store, products, &rules, self.config.check_timeout())
            .await
        {
            Ok(matches) => {
                info!(store = store.label(), matches = matches.len(), "Check finished");
                CheckOutcome::Scanned(StoreMatches {
                    label: store.label().to_string(),
                    host: store.host(),
                    matches,
                })
            }
            Err(err) => {
                warn!(store = store.label(), error = %err, "Check failed");
                CheckOutcome::Failed {
                    label: store.label().to_string(),
                    error: error_excerpt(&err.to_string(), self.config.error_excerpt_chars),
                }
            }
        }
    }

    /// Scan every catalog store in order.
    pub async fn sweep(&self, products: &ProductList) -> SweepReport {
        let rules = self.config.sweep_rules();
        let timeout = self.config.sweep_timeout();
        let delay = self.config.sweep_delay();
        let mut report = SweepReport::default();

        for store in self.catalog.iter() {
            report.scanned += 1;

            match self.scan_store(store, products, &rules, timeout).await {
                Ok(mut matches) => {
                    info!(store = store.label(), matches = matches.len(), "Store scanned");
                    if !matches.is_empty() {
                        matches.truncate(self.config.sweep_matches_per_store);
                        report.stores.push(StoreMatches {
                            label: store.label().to_string(),
                            host: store.host(),
                            matches,
                        });
                    }
                }
                Err(err) => {
                    warn!(store = store.label(), error = %err, "Store scan failed, skipping");
                    report.failed.push(store.label().to_string());
                }
            }

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        info!(
            scanned = report.scanned,
            with_matches = report.stores.len(),
            failed = report.failed.len(),
            "Sweep finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::html::HtmlDealExtractor;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::HashMap;

    /// Serves canned markup per URL and records the order of requests.
    #[derive(Default)]
    struct ScriptedFetcher {
        pages: HashMap<String, Result<String, FetchError>>,
        requests: Mutex<Vec<(String, Duration)>>,
    }

    impl ScriptedFetcher {
        fn page(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), Ok(html.to_string()));
            self
        }

        fn failing(mut self, url: &str) -> Self {
            self.pages.insert(
                url.to_string(),
                Err(FetchError::Status {
                    url: url.to_string(),
                    status: 503,
                }),
            );
            self
        }
    }

    #[async_trait]
    impl PageFetcher for ScriptedFetcher {
        async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
            self.requests.lock().push((url.to_string(), timeout));
            self.pages.get(url).cloned().unwrap_or_else(|| {
                Err(FetchError::Request {
                    url: url.to_string(),
                    reason: "no route".into(),
                })
            })
        }
    }

    fn catalog(n: usize) -> Catalog {
        Catalog::new(
            (1..=n)
                .map(|i| StoreEntry::new(format!("Store {i}"), format!("https://s{i}.test/deals")))
                .collect(),
        )
        .unwrap()
    }

    fn fast_config() -> ScanConfig {
        ScanConfig {
            sweep_delay_ms: 0,
            ..ScanConfig::default()
        }
    }

    fn scanner(fetcher: Arc<ScriptedFetcher>, catalog: Catalog, config: ScanConfig) -> DealScanner {
        DealScanner::new(fetcher, Arc::new(HtmlDealExtractor::new()), catalog, config)
    }

    #[test]
    fn excerpt_counts_characters() {
        assert_eq!(error_excerpt("åäö-error", 3), "åäö");
        assert_eq!(error_excerpt("short", 80), "short");
    }

    #[tokio::test]
    async fn check_matches_primary_store() {
        let fetcher = Arc::new(ScriptedFetcher::default().page(
            "https://s1.test/deals",
            r#"<div class="offer">MJÖLK 15kr REA!</div>"#,
        ));
        let scanner = scanner(fetcher.clone(), catalog(3), fast_config());
        let products = ProductList::from_stored(["mjölk", "bröd"]);

        let outcome = scanner.check(&products).await;

        assert_eq!(
            outcome,
            CheckOutcome::Scanned(StoreMatches {
                label: "Store 1".into(),
                host: "s1.test".into(),
                matches: vec!["mjölk".into()],
            })
        );
        let requests = fetcher.requests.lock();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].1, Duration::from_secs(15));
    }

    #[tokio::test]
    async fn check_failure_is_truncated() {
        let long_url = format!("https://s1.test/{}", "x".repeat(200));
        let fetcher = Arc::new(ScriptedFetcher::default().failing(&long_url));
        let catalog = Catalog::new(vec![StoreEntry::new("Slow", long_url.clone())]).unwrap();
        let scanner = scanner(fetcher, catalog, fast_config());

        let outcome = scanner.check(&ProductList::from_stored(["ost"])).await;

        match outcome {
            CheckOutcome::Failed { label, error } => {
                assert_eq!(label, "Slow");
                assert_eq!(error.chars().count(), 80);
                assert!(error.starts_with("HTTP 503 from"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn sweep_isolates_failing_store() {
        let deal = r#"<span class="p">Ost 20% rabatt</span>"#;
        let fetcher = Arc::new(
            ScriptedFetcher::default()
                .page("https://s1.test/deals", deal)
                .page("https://s2.test/deals", deal)
                .failing("https://s3.test/deals")
                .page("https://s4.test/deals", deal),
        );
        let scanner = scanner(fetcher.clone(), catalog(4), fast_config());

        let report = scanner.sweep(&ProductList::from_stored(["ost"])).await;

        let labels: Vec<_> = report.stores.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Store 1", "Store 2", "Store 4"]);
        assert_eq!(report.failed, vec!["Store 3"]);
        assert_eq!(report.scanned, 4);

        let requests = fetcher.requests.lock();
        let urls: Vec<_> = requests.iter().map(|(u, _)| u.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://s1.test/deals",
                "https://s2.test/deals",
                "https://s3.test/deals",
                "https://s4.test/deals"
            ]
        );
        assert!(requests.iter().all(|(_, t)| *t == Duration::from_secs(12)));
    }

    #[tokio::test]
    async fn sweep_caps_matches_per_store() {
        let html = r#"<div class="d">a b c d e f 10 kr</div>"#;
        let fetcher = Arc::new(ScriptedFetcher::default().page("https://s1.test/deals", html));
        let scanner = scanner(fetcher, catalog(1), fast_config());
        let products = ProductList::from_stored(["a", "b", "c", "d", "e", "f"]);

        let report = scanner.sweep(&products).await;

        assert_eq!(report.stores[0].matches, vec!["a", "b", "c", "d"]);
    }

    #[tokio::test]
    async fn sweep_without_matches_is_empty() {
        let fetcher = Arc::new(
            ScriptedFetcher::default().page("https://s1.test/deals", "<div class=\"d\">Bröd 5kr</div>"),
        );
        let scanner = scanner(fetcher, catalog(2), fast_config());

        let report = scanner.sweep(&ProductList::from_stored(["mjölk"])).await;

        assert!(!report.has_matches());
        assert_eq!(report.failed, vec!["Store 2"]);
    }

    #[tokio::test(start_paused = true)]
    async fn sweep_pauses_after_every_store() {
        let fetcher = Arc::new(ScriptedFetcher::default().failing("https://s1.test/deals"));
        let scanner = scanner(fetcher, catalog(3), ScanConfig::default());

        let started = tokio::time::Instant::now();
        scanner.sweep(&ProductList::new()).await;

        assert!(started.elapsed() >= Duration::from_millis(2100));
    }
}
