//! HTTP page fetching via reqwest.

mod fetcher;

pub use fetcher::{HttpPageFetcher, DEFAULT_USER_AGENT};
