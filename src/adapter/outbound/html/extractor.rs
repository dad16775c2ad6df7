//! Heuristic deal-snippet extraction from store pages.
//!
//! Store pages are not parsed structurally. Every element of a configured kind
//! that carries a styling attribute is flattened to text and kept when it
//! looks like a price or promotion line. Nested candidates are visited too,
//! so a wrapping `div` and its inner `span` can both produce snippets.

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::domain::ExtractRules;
use crate::port::DealExtractor;

/// [`DealExtractor`] backed by the `scraper` HTML parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlDealExtractor;

impl HtmlDealExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn selector(rules: &ExtractRules) -> Option<Selector> {
        let css = rules
            .elements
            .iter()
            .map(|element| match &rules.required_attribute {
                Some(attribute) => format!("{element}[{attribute}]"),
                None => element.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");

        let selector = match Selector::parse(&css) {
            Ok(selector) => Some(selector),
            Err(err) => {
                warn!(selector = %css, error = %err, "Invalid extraction selector");
                None
            }
        };
        selector
    }
}

impl DealExtractor for HtmlDealExtractor {
    fn extract_candidate_texts(&self, markup: &str, rules: &ExtractRules) -> Vec<String> {
        if rules.max_count == 0 || rules.elements.is_empty() {
            return Vec::new();
        }
        let Some(selector) = Self::selector(rules) else {
            return Vec::new();
        };

        let document = Html::parse_document(markup);
        let mut deals = Vec::new();

        for element in document.select(&selector) {
            let text = element
                .text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect::<String>()
                .to_lowercase();

            if rules.accepts(&text) {
                deals.push(text);
                if deals.len() >= rules.max_count {
                    break;
                }
            }
        }

        debug!(snippets = deals.len(), "Extracted deal snippets");
        deals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(markup: &str, rules: &ExtractRules) -> Vec<String> {
        HtmlDealExtractor::new().extract_candidate_texts(markup, rules)
    }

    #[test]
    fn keeps_classed_elements_with_keywords() {
        let html = r#"
            <html><body>
              <h3 class="title">MJÖLK 15kr REA!</h3>
              <h3>Bröd 20 kr</h3>
              <span class="tag">Nyhet</span>
              <a class="link" href="/x">Ost -20%</a>
            </body></html>
        "#;

        let deals = extract(html, &ExtractRules::check());
        assert_eq!(deals, vec!["mjölk 15kr rea!", "ost -20%"]);
    }

    #[test]
    fn flattens_nested_text_without_separators() {
        let html = r#"<div class="card"><span>  Kaffe </span><b>49 kr</b></div>"#;

        let deals = extract(html, &ExtractRules::check());
        assert_eq!(deals, vec!["kaffe49 kr"]);
    }

    #[test]
    fn visits_nested_candidates() {
        let html = r#"<div class="card"><span class="price">Smör 39 kr</span></div>"#;

        let deals = extract(html, &ExtractRules::check());
        assert_eq!(deals, vec!["smör 39 kr", "smör 39 kr"]);
    }

    #[test]
    fn never_exceeds_max_count() {
        let html: String = (0..100)
            .map(|i| format!("<div class=\"d\">vara {i} 10 kr</div>"))
            .collect();

        assert_eq!(extract(&html, &ExtractRules::check()).len(), 30);
        assert_eq!(extract(&html, &ExtractRules::sweep()).len(), 20);
        assert_eq!(
            extract(&html, &ExtractRules::check().with_max_count(3)),
            vec!["vara 0 10 kr", "vara 1 10 kr", "vara 2 10 kr"]
        );
    }

    #[test]
    fn sweep_rules_include_top_level_headings() {
        let html = r#"<h1 class="hero">Veckans pris: Ägg</h1>"#;

        assert!(extract(html, &ExtractRules::check()).is_empty());
        assert_eq!(extract(html, &ExtractRules::sweep()), vec!["veckans pris: ägg"]);
    }

    #[test]
    fn attribute_filter_can_be_disabled() {
        let html = r#"<h3>Bröd 20 kr</h3>"#;
        let rules = ExtractRules::check().with_required_attribute(None);

        assert_eq!(extract(html, &rules), vec!["bröd 20 kr"]);
    }

    #[test]
    fn empty_or_garbage_markup_yields_nothing() {
        assert!(extract("", &ExtractRules::check()).is_empty());
        assert!(extract("<<<not html", &ExtractRules::check()).is_empty());
    }

    #[test]
    fn zero_cap_short_circuits() {
        let html = r#"<div class="d">Mjölk 10 kr</div>"#;
        assert!(extract(html, &ExtractRules::check().with_max_count(0)).is_empty());
    }

    #[test]
    fn invalid_element_list_yields_nothing() {
        let rules = ExtractRules {
            elements: vec!["div[".to_string()],
            ..ExtractRules::check()
        };

        assert!(HtmlDealExtractor::selector(&rules).is_none());
        assert!(extract(r#"<div class="d">Mjölk 10 kr</div>"#, &rules).is_empty());
    }

    #[test]
    fn selector_covers_every_configured_element() {
        let selector = HtmlDealExtractor::selector(&ExtractRules::sweep());
        assert!(selector.is_some());
    }
}
