//! Browser-like HTTP client for store promotion pages.
//!
//! Several store sites reject the default reqwest identifier, so every
//! request carries a desktop `User-Agent` and an HTML `Accept` header.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client as HttpClient;
use tracing::debug;

use crate::error::{ConfigError, FetchError};
use crate::port::PageFetcher;

/// Desktop browser identifier sent with every request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_SWEDISH: &str = "sv-SE,sv;q=0.9,en;q=0.8";

/// [`PageFetcher`] backed by a shared reqwest client.
///
/// Timeouts are applied per request so the single-store check and the
/// sweep can use different budgets with one client.
#[derive(Clone)]
pub struct HttpPageFetcher {
    http: HttpClient,
}

impl HttpPageFetcher {
    /// Build a fetcher that identifies itself as `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `user_agent` is not a valid
    /// header value or the client cannot be built.
    pub fn new(user_agent: &str) -> Result<Self, ConfigError> {
        let user_agent = HeaderValue::from_str(user_agent).map_err(|e| invalid_user_agent(&e))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_SWEDISH));

        let http = HttpClient::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| invalid_user_agent(&e))?;

        Ok(Self { http })
    }

    /// Fetcher with [`DEFAULT_USER_AGENT`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the TLS backend cannot be initialized.
    pub fn browser() -> Result<Self, ConfigError> {
        Self::new(DEFAULT_USER_AGENT)
    }

    fn request_error(url: &str, err: &reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Request {
                url: url.to_string(),
                reason: err.to_string(),
            }
        }
    }
}

fn invalid_user_agent(err: &dyn std::fmt::Display) -> ConfigError {
    ConfigError::InvalidValue {
        field: "user_agent",
        reason: err.to_string(),
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let response = self
            .http
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|err| Self::request_error(url, &err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|err| {
            if err.is_timeout() {
                Self::request_error(url, &err)
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    reason: err.to_string(),
                }
            }
        })?;

        debug!(url, bytes = body.len(), "Fetched store page");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn sends_browser_user_agent() {
        let server = MockServer::start();
        let page = server.mock(|when, then| {
            when.method(GET)
                .path("/erbjudanden")
                .header("user-agent", DEFAULT_USER_AGENT);
            then.status(200).body("<div class=\"p\">Mjölk 15 kr</div>");
        });

        let fetcher = HttpPageFetcher::browser().unwrap();
        let body = fetcher
            .fetch(&server.url("/erbjudanden"), Duration::from_secs(5))
            .await
            .unwrap();

        page.assert();
        assert!(body.contains("Mjölk 15 kr"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gone");
            then.status(404);
        });

        let fetcher = HttpPageFetcher::browser().unwrap();
        let err = fetcher
            .fetch(&server.url("/gone"), Duration::from_secs(5))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn slow_page_times_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .delay(Duration::from_millis(1500))
                .body("late");
        });

        let fetcher = HttpPageFetcher::browser().unwrap();
        let err = fetcher
            .fetch(&server.url("/slow"), Duration::from_millis(200))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Timeout { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_request_error() {
        let fetcher = HttpPageFetcher::browser().unwrap();
        let err = fetcher
            .fetch("http://127.0.0.1:9/", Duration::from_secs(2))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            FetchError::Request { .. } | FetchError::Timeout { .. }
        ));
    }

    #[test]
    fn invalid_user_agent_is_a_config_error() {
        let result = HttpPageFetcher::new("Mozilla\nbad");

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "user_agent",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn custom_user_agent_is_sent() {
        let server = MockServer::start_async().await;
        let page = server
            .mock_async(|when, then| {
                when.method(GET).path("/p").header("user-agent", "dealwatch-test/1.0");
                then.status(200).body("ok");
            })
            .await;

        let fetcher = HttpPageFetcher::new("dealwatch-test/1.0").unwrap();
        let body = fetcher
            .fetch(&server.url("/p"), Duration::from_secs(5))
            .await
            .unwrap();

        page.assert_async().await;
        assert_eq!(body, "ok");
    }
}
