//! Persistence port for the product list.

use crate::domain::ProductList;
use crate::error::Result;

/// Storage operations for the single shared product list.
///
/// Implementations distinguish "never created" (`None`) from an empty list so
/// replies can word the two cases differently.
pub trait ProductStore: Send + Sync {
    /// Load the list, or `None` if nothing has been stored yet.
    fn load(&self) -> Result<Option<ProductList>>;

    /// Replace the stored list.
    fn save(&self, list: &ProductList) -> Result<()>;

    /// Delete all stored state. Returns whether anything existed.
    fn clear(&self) -> Result<bool>;
}
