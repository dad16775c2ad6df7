use super::super::format::{format_check, format_stores, format_sweep};
use super::TelegramControl;

const ADD_FIRST: &str = "Add products first: /add_list";

impl TelegramControl {
    pub(super) fn list_text(&self) -> String {
        match self.products.list() {
            Ok(Some(list)) => format!(
                "📋 Your list ({}):\n{}",
                list.len(),
                list.tail(self.list_display_limit).join("\n")
            ),
            Ok(None) => "📋 Your list is empty. Use /add_list".to_string(),
            Err(err) => self.storage_error_text("read your list", &err),
        }
    }

    pub(super) async fn check_text(&self) -> String {
        let products = match self.products.list() {
            Ok(Some(list)) => list,
            Ok(None) => return ADD_FIRST.to_string(),
            Err(err) => return self.storage_error_text("read your list", &err),
        };

        let outcome = self.scanner.check(&products).await;
        format_check(&outcome, self.scanner.config().check_display_limit)
    }

    pub(super) async fn check_all_text(&self) -> String {
        let products = match self.products.list() {
            Ok(Some(list)) => list,
            Ok(None) => return ADD_FIRST.to_string(),
            Err(err) => return self.storage_error_text("read your list", &err),
        };

        let report = self.scanner.sweep(&products).await;
        format_sweep(&report, self.scanner.config().sweep_stores_shown)
    }

    pub(super) fn stores_text(&self) -> String {
        format_stores(self.scanner.catalog())
    }
}
