//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies: fetching store
//! pages, picking deal text out of them, and persisting the product list.

pub mod extractor;
pub mod fetcher;
pub mod store;
