//! Reply formatting for scans and the store list.

use std::fmt::Write;

use crate::domain::{capitalize, Catalog, CheckOutcome, SweepReport};

/// Render the `/check` reply, listing at most `display_limit` matches.
#[must_use]
pub fn format_check(outcome: &CheckOutcome, display_limit: usize) -> String {
    match outcome {
        CheckOutcome::Scanned(store) if store.matches.is_empty() => {
            "😔 No deals on your list today.\nTry adding more products with /add_list!".to_string()
        }
        CheckOutcome::Scanned(store) => {
            let mut msg = format!("🔥 DEALS FOUND at {}:\n\n", store.label);
            for product in store.matches.iter().take(display_limit) {
                let _ = writeln!(msg, "• {}", capitalize(product));
            }
            let _ = write!(msg, "\n👉 {}", store.host);
            msg
        }
        CheckOutcome::Failed { label, error } => {
            format!("❌ Check failed: {error}\n{label} is unavailable.")
        }
    }
}

/// Render the `/check_all` reply, listing at most `stores_shown` stores.
#[must_use]
pub fn format_sweep(report: &SweepReport, stores_shown: usize) -> String {
    if !report.has_matches() {
        return "😔 No deals anywhere today.".to_string();
    }

    let mut msg = String::from("🏆 DEALS FOUND:\n\n");
    for store in report.stores.iter().take(stores_shown) {
        let _ = writeln!(msg, "{}:", store.label);
        for product in &store.matches {
            let _ = writeln!(msg, "  • {}", capitalize(product));
        }
        msg.push('\n');
    }
    msg.trim_end().to_string()
}

/// Render the `/stores` reply.
#[must_use]
pub fn format_stores(catalog: &Catalog) -> String {
    let mut msg = format!("🛒 Your {} stores:\n\n", catalog.len());
    for (i, store) in catalog.iter().enumerate() {
        let _ = write!(msg, "{}. {}\n   {}\n\n", i + 1, store.label(), store.host());
    }
    msg.trim_end().to_string()
}
