//! Static catalog of watched stores.

use url::Url;

/// One store promotion page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEntry {
    label: String,
    url: String,
}

impl StoreEntry {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Human-readable label shown in replies.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Host portion of the URL, or the raw URL when it does not parse.
    #[must_use]
    pub fn host(&self) -> String {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| self.url.clone())
    }
}

const DEFAULT_STORES: [(&str, &str); 9] = [
    (
        "🟠 Willys Jakobsberg (Nettovägen 2)",
        "https://www.willys.se/erbjudanden/ehandel",
    ),
    (
        "🔵 Willys Barkarby",
        "https://www.willys.se/erbjudanden/butik",
    ),
    (
        "🟢 Maxi ICA Barkarbystaden",
        "https://www.ica.se/erbjudanden/maxi-ica-stormarknad-barkarbystaden-1003408/",
    ),
    (
        "🟡 ICA Supermarket Hässelby Torg",
        "https://www.ica.se/erbjudanden/ica-supermarket-hasselby-torg-1004531/",
    ),
    (
        "🔴 Hemköp Jakobsbergs Centrum",
        "https://www.hemkop.se/butik/4119/",
    ),
    (
        "🟣 Coop Järfälla (Veckovägen)",
        "https://www.coop.se/butiker/coop-jarfalla",
    ),
    (
        "⚫ Lidl Hässelby (Lövkojsgränd)",
        "https://www.lidl.se/s/sv-SE/butiker/haesselby/loevkojsgraend-12/",
    ),
    (
        "⚪ Lidl Barkarby (Enköpingsvägen)",
        "https://www.lidl.se/c/oerbjudanden/a10000000/",
    ),
    ("🗡 Matvärlden Veddesta", "https://www.matvarlden.se/"),
];

/// Ordered, immutable set of stores.
///
/// The first entry is the primary store used by the single-store check.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<StoreEntry>,
}

impl Catalog {
    /// Build a catalog from explicit entries.
    ///
    /// Returns `None` for an empty list since the primary store must exist.
    #[must_use]
    pub fn new(entries: Vec<StoreEntry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self { entries })
    }

    /// The primary store.
    #[must_use]
    pub fn primary(&self) -> &StoreEntry {
        &self.entries[0]
    }

    #[must_use]
    pub fn entries(&self) -> &[StoreEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StoreEntry> {
        self.entries.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            entries: DEFAULT_STORES
                .iter()
                .map(|(label, url)| StoreEntry::new(*label, *url))
                .collect(),
        }
    }
}
