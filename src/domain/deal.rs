//! Deal matching and scan results.
//!
//! A deal snippet is a lowercase text fragment pulled from a promotion page.
//! Matching is a literal substring test: a tracked product matches when any
//! snippet contains it. Short names can hit unrelated longer words ("te" in
//! "protein"); that is accepted behaviour.

/// Products that appear in at least one deal snippet.
///
/// Keeps the order of `products`. Both sides are expected to be lowercase
/// already.
#[must_use]
pub fn match_products<P, D>(products: &[P], deals: &[D]) -> Vec<String>
where
    P: AsRef<str>,
    D: AsRef<str>,
{
    products
        .iter()
        .map(|p| p.as_ref())
        .filter(|product| deals.iter().any(|deal| deal.as_ref().contains(*product)))
        .map(str::to_string)
        .collect()
}

/// Uppercase the first character and lowercase the rest.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Result of scanning one store page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreMatches {
    /// Store label from the catalog.
    pub label: String,
    /// Host of the scanned page, used for link lines.
    pub host: String,
    /// Matched product names, in list order.
    pub matches: Vec<String>,
}

/// Outcome of the single-store check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The page was fetched; `matches` may be empty.
    Scanned(StoreMatches),
    /// Fetching or parsing failed.
    Failed {
        label: String,
        error: String,
    },
}

/// Outcome of a sweep over the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Stores with at least one match, in catalog order, matches capped.
    pub stores: Vec<StoreMatches>,
    /// Labels of stores whose fetch failed.
    pub failed: Vec<String>,
    /// Number of stores visited.
    pub scanned: usize,
}

impl SweepReport {
    #[must_use]
    pub fn has_matches(&self) -> bool {
        !self.stores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_literal_substring() {
        assert_eq!(match_products(&["mjölk"], &["mjölk 10 kr"]), vec!["mjölk"]);
        assert!(match_products(&["mjölk"], &["bröd 5kr"]).is_empty());
    }

    #[test]
    fn keeps_product_order() {
        let products = ["ost", "bröd", "mjölk"];
        let deals = ["mjölk 15kr", "hushållsost 20% rabatt"];

        assert_eq!(match_products(&products, &deals), vec!["ost", "mjölk"]);
    }

    #[test]
    fn substring_of_longer_word_matches() {
        assert_eq!(match_products(&["te"], &["protein bar 25 kr"]), vec!["te"]);
    }

    #[test]
    fn no_deals_no_matches() {
        let deals: [&str; 0] = [];
        assert!(match_products(&["mjölk"], &deals).is_empty());
    }

    #[test]
    fn capitalize_handles_unicode() {
        assert_eq!(capitalize("mjölk"), "Mjölk");
        assert_eq!(capitalize("äPPLE"), "Äpple");
        assert_eq!(capitalize(""), "");
    }
}
