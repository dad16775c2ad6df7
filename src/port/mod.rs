//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                ┌──────────────────────────┐
//!                │       Application        │
//!                │   (check / sweep scans)  │
//!     ┌──────────┤      Domain + Port       ├──────────┐
//!     │          └──────────────────────────┘          │
//!     ▼                                                ▼
//! ┌─────────────┐                              ┌──────────────┐
//! │ PageFetcher │                              │ ProductStore │
//! │  (reqwest)  │                              │ (JSON file)  │
//! └─────────────┘                              └──────────────┘
//! ```

pub mod outbound;

pub use outbound::extractor::DealExtractor;
pub use outbound::fetcher::PageFetcher;
pub use outbound::store::ProductStore;
