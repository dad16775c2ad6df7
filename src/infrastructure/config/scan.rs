//! Scan timing and reply limits.

use std::time::Duration;

use serde::Deserialize;

use crate::adapter::outbound::http::DEFAULT_USER_AGENT;
use crate::domain::ExtractRules;

/// Settings shared by the single-store check and the sweep.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// `User-Agent` sent to store sites.
    pub user_agent: String,
    /// Fetch timeout for the single-store check.
    pub check_timeout_secs: u64,
    /// Fetch timeout per store during a sweep.
    pub sweep_timeout_secs: u64,
    /// Pause after each store in a sweep.
    pub sweep_delay_ms: u64,
    /// Matches listed in the `/check` reply.
    pub check_display_limit: usize,
    /// Matches kept per store during a sweep.
    pub sweep_matches_per_store: usize,
    /// Stores listed in the `/check_all` reply.
    pub sweep_stores_shown: usize,
    /// Characters of an error message shown to the user.
    pub error_excerpt_chars: usize,
    /// Only consider elements carrying a `class` attribute.
    pub require_class_attribute: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            check_timeout_secs: 15,
            sweep_timeout_secs: 12,
            sweep_delay_ms: 700,
            check_display_limit: 8,
            sweep_matches_per_store: 4,
            sweep_stores_shown: 6,
            error_excerpt_chars: 80,
            require_class_attribute: true,
        }
    }
}

impl ScanConfig {
    #[must_use]
    pub const fn check_timeout(&self) -> Duration {
        Duration::from_secs(self.check_timeout_secs)
    }

    #[must_use]
    pub const fn sweep_timeout(&self) -> Duration {
        Duration::from_secs(self.sweep_timeout_secs)
    }

    #[must_use]
    pub const fn sweep_delay(&self) -> Duration {
        Duration::from_millis(self.sweep_delay_ms)
    }

    /// Extraction rules for the single-store check.
    #[must_use]
    pub fn check_rules(&self) -> ExtractRules {
        self.apply_attribute_filter(ExtractRules::check())
    }

    /// Extraction rules for the sweep.
    #[must_use]
    pub fn sweep_rules(&self) -> ExtractRules {
        self.apply_attribute_filter(ExtractRules::sweep())
    }

    fn apply_attribute_filter(&self, rules: ExtractRules) -> ExtractRules {
        if self.require_class_attribute {
            rules
        } else {
            rules.with_required_attribute(None)
        }
    }
}
