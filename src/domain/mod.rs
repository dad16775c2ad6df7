//! Store- and transport-agnostic domain logic.

mod catalog;
mod deal;
mod product;
pub mod rules;

pub use catalog::{Catalog, StoreEntry};
pub use deal::{capitalize, match_products, CheckOutcome, StoreMatches, SweepReport};
pub use product::{normalize_product, parse_product_input, ProductList};
pub use rules::ExtractRules;
