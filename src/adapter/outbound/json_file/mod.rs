//! JSON file persistence for the product list.

mod store;

pub use store::{JsonFileStore, DEFAULT_PRODUCTS_FILE};
