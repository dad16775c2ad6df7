//! HTML deal extraction via scraper.

mod extractor;

pub use extractor::HtmlDealExtractor;
