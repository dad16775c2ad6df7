//! Deal extraction port.

use crate::domain::ExtractRules;

/// Pulls candidate deal snippets out of raw page markup.
///
/// Returned snippets are lowercase, in document order, and never more than
/// `rules.max_count`.
pub trait DealExtractor: Send + Sync {
    fn extract_candidate_texts(&self, markup: &str, rules: &ExtractRules) -> Vec<String>;
}
