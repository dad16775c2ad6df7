//! Heuristics deciding which page fragments count as deal snippets.
//!
//! These values are tuning knobs for a noise filter, not a model of any
//! store's markup. The presets mirror what the single-store check and the
//! sweep have always used.

/// Snippets must be strictly longer than this many characters.
pub const MIN_SNIPPET_LEN: usize = 3;

/// Attribute a candidate element must carry.
pub const DEFAULT_REQUIRED_ATTRIBUTE: &str = "class";

pub const CHECK_ELEMENTS: [&str; 5] = ["h3", "h4", "a", "span", "div"];
pub const CHECK_KEYWORDS: [&str; 3] = ["kr", "%", "erbjudande"];
pub const CHECK_MAX_SNIPPETS: usize = 30;

pub const SWEEP_ELEMENTS: [&str; 7] = ["h1", "h2", "h3", "h4", "a", "span", "div"];
pub const SWEEP_KEYWORDS: [&str; 5] = ["kr", "%", "rabatt", "erbjudande", "pris"];
pub const SWEEP_MAX_SNIPPETS: usize = 20;

/// Filter applied to a parsed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractRules {
    /// Element names to consider.
    pub elements: Vec<String>,
    /// Only elements carrying this attribute qualify; `None` disables the check.
    pub required_attribute: Option<String>,
    /// Snippets must be longer than this many characters.
    pub min_len: usize,
    /// A snippet must contain at least one of these.
    pub keywords: Vec<String>,
    /// Collection stops once this many snippets are found.
    pub max_count: usize,
}

impl ExtractRules {
    /// Rules for the single-store check.
    #[must_use]
    pub fn check() -> Self {
        Self::preset(&CHECK_ELEMENTS, &CHECK_KEYWORDS, CHECK_MAX_SNIPPETS)
    }

    /// Rules for the multi-store sweep.
    #[must_use]
    pub fn sweep() -> Self {
        Self::preset(&SWEEP_ELEMENTS, &SWEEP_KEYWORDS, SWEEP_MAX_SNIPPETS)
    }

    #[must_use]
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    #[must_use]
    pub fn with_required_attribute(mut self, attribute: Option<&str>) -> Self {
        self.required_attribute = attribute.map(str::to_string);
        self
    }

    /// Whether flattened, lowercased text qualifies as a snippet.
    #[must_use]
    pub fn accepts(&self, text: &str) -> bool {
        text.chars().count() > self.min_len
            && self.keywords.iter().any(|k| text.contains(k.as_str()))
    }

    fn preset(elements: &[&str], keywords: &[&str], max_count: usize) -> Self {
        Self {
            elements: elements.iter().map(|e| (*e).to_string()).collect(),
            required_attribute: Some(DEFAULT_REQUIRED_ATTRIBUTE.to_string()),
            min_len: MIN_SNIPPET_LEN,
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            max_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_in_keywords_and_cap() {
        let check = ExtractRules::check();
        let sweep = ExtractRules::sweep();

        assert_eq!(check.max_count, 30);
        assert_eq!(sweep.max_count, 20);
        assert!(!check.keywords.contains(&"rabatt".to_string()));
        assert!(sweep.keywords.contains(&"pris".to_string()));
        assert!(sweep.elements.contains(&"h1".to_string()));
        assert!(!check.elements.contains(&"h1".to_string()));
    }

    #[test]
    fn accepts_requires_length_and_keyword() {
        let rules = ExtractRules::check();

        assert!(rules.accepts("mjölk 15kr"));
        assert!(rules.accepts("-20%!"));
        assert!(!rules.accepts("5kr"));
        assert!(!rules.accepts("färsk mjölk"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let rules = ExtractRules::check();
        // Four characters, more than four bytes.
        assert!(rules.accepts("ä%öå"));
        assert!(!rules.accepts("ä%ö"));
    }

    #[test]
    fn sweep_accepts_extra_keywords() {
        assert!(ExtractRules::sweep().accepts("lågt pris på ost"));
        assert!(!ExtractRules::check().accepts("lågt pris på ost"));
    }
}
