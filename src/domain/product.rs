//! Tracked product names.
//!
//! - [`ProductList`] - Deduplicated set of lowercase product names kept in
//!   storage order
//! - [`normalize_product`] - Canonical form used on both sides of a match

use crate::error::ListError;

/// Canonical form of a product name: trimmed and lowercased.
#[must_use]
pub fn normalize_product(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Split comma-separated user input into normalized product names.
///
/// Empty tokens (`"mjölk,,bröd"`, trailing commas) are dropped.
#[must_use]
pub fn parse_product_input(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_product)
        .filter(|p| !p.is_empty())
        .collect()
}

/// The user's shopping list.
///
/// Holds no duplicates and no empty names. Entries keep the order in which
/// they were first added so the most recent additions sit at the tail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductList {
    items: Vec<String>,
}

impl ProductList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from stored entries, normalizing and dropping duplicates.
    pub fn from_stored<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for item in items {
            list.insert(&normalize_product(item.as_ref()));
        }
        list
    }

    /// Union comma-separated input into the list.
    ///
    /// Returns the number of newly inserted names.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyInput`] when the input holds no product
    /// names; the list is left untouched.
    pub fn add_input(&mut self, raw: &str) -> Result<usize, ListError> {
        let parsed = parse_product_input(raw);
        if parsed.is_empty() {
            return Err(ListError::EmptyInput);
        }

        Ok(parsed.iter().filter(|p| self.insert(p)).count())
    }

    /// Remove a single product name.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] with the normalized name if it was
    /// never in the list.
    pub fn remove(&mut self, raw: &str) -> Result<String, ListError> {
        let product = normalize_product(raw);
        match self.items.iter().position(|p| *p == product) {
            Some(idx) => Ok(self.items.remove(idx)),
            None => Err(ListError::NotFound(product)),
        }
    }

    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        let product = normalize_product(raw);
        self.items.iter().any(|p| *p == product)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries in storage order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The last `limit` entries, in storage order.
    #[must_use]
    pub fn tail(&self, limit: usize) -> &[String] {
        let start = self.items.len().saturating_sub(limit);
        &self.items[start..]
    }

    /// The first `limit` entries, in storage order.
    #[must_use]
    pub fn head(&self, limit: usize) -> &[String] {
        &self.items[..self.items.len().min(limit)]
    }

    fn insert(&mut self, product: &str) -> bool {
        if product.is_empty() || self.items.iter().any(|p| p == product) {
            return false;
        }
        self.items.push(product.to_string());
        true
    }
}
