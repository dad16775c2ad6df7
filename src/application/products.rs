//! Product list use cases.
//!
//! Every mutation loads the stored list, applies the change, and writes it
//! back while holding the service's update lock, so concurrent chats never
//! lose each other's edits. Storage errors propagate to the caller unchanged.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use crate::domain::{normalize_product, ProductList};
use crate::error::{ListError, Result};
use crate::port::ProductStore;

/// Result of a successful `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    /// Names that were not already tracked.
    pub added: usize,
    /// List size after the union.
    pub total: usize,
}

/// Result of a `remove` that reached the stored list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// No list has been created yet.
    NoList,
    /// The product was removed; `remaining` entries are left.
    Removed { remaining: usize },
    /// The product was not tracked; `list` is the unchanged stored list.
    NotFound { list: ProductList },
}

/// Product list operations over a [`ProductStore`].
pub struct ProductService {
    store: Arc<dyn ProductStore>,
    /// Held across load, change, and save.
    update_lock: Mutex<()>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            store,
            update_lock: Mutex::new(()),
        }
    }

    /// Union comma-separated input into the list and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyInput`] for blank input (nothing is written),
    /// or the storage error if loading or saving fails.
    pub fn add(&self, raw: &str) -> Result<AddOutcome> {
        let _guard = self.update_lock.lock();
        let mut list = self.store.load()?.unwrap_or_default();
        let added = list.add_input(raw)?;
        self.store.save(&list)?;

        info!(added, total = list.len(), "Products added");
        Ok(AddOutcome {
            added,
            total: list.len(),
        })
    }

    /// The stored list, or `None` if none was ever created.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the list cannot be read.
    pub fn list(&self) -> Result<Option<ProductList>> {
        self.store.load()
    }

    /// Remove one product.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyInput`] for a blank name, or the storage
    /// error if loading or saving fails.
    pub fn remove(&self, raw: &str) -> Result<RemoveOutcome> {
        if normalize_product(raw).is_empty() {
            return Err(ListError::EmptyInput.into());
        }
        let _guard = self.update_lock.lock();
        let Some(mut list) = self.store.load()? else {
            return Ok(RemoveOutcome::NoList);
        };

        match list.remove(raw) {
            Ok(product) => {
                self.store.save(&list)?;
                info!(product = %product, remaining = list.len(), "Product removed");
                Ok(RemoveOutcome::Removed {
                    remaining: list.len(),
                })
            }
            Err(ListError::NotFound(_)) => Ok(RemoveOutcome::NotFound { list }),
            Err(err) => Err(err.into()),
        }
    }

    /// Delete the stored list. Returns whether anything existed.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<bool> {
        let _guard = self.update_lock.lock();
        let existed = self.store.clear()?;
        info!(existed, "Product list cleared");
        Ok(existed)
    }
}
