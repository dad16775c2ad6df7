use crate::application::products::RemoveOutcome;
use crate::domain::{capitalize, normalize_product};
use crate::error::{Error, ListError};

use super::TelegramControl;

const ADD_USAGE: &str = "Example: /add_list mjölk,bröd,ost";
const REMOVE_USAGE: &str = "Name a product: /remove mjölk\nOr /list to see your list";

impl TelegramControl {
    pub(super) fn add_text(&self, args: &str) -> String {
        match self.products.add(args) {
            Ok(outcome) => format!(
                "✅ Added: {}\nTotal products: {}",
                args.trim(),
                outcome.total
            ),
            Err(Error::List(ListError::EmptyInput)) => ADD_USAGE.to_string(),
            Err(err) => self.storage_error_text("save your list", &err),
        }
    }

    pub(super) fn remove_text(&self, args: &str) -> String {
        let product = normalize_product(args);
        if product.is_empty() {
            return REMOVE_USAGE.to_string();
        }

        match self.products.remove(&product) {
            Ok(RemoveOutcome::NoList) => REMOVE_USAGE.to_string(),
            Ok(RemoveOutcome::Removed { remaining }) => format!(
                "🗑️ Removed: {}\nRemaining: {remaining}",
                capitalize(&product)
            ),
            Ok(RemoveOutcome::NotFound { list }) => format!(
                "❌ {} is not in your list:\n{}",
                capitalize(&product),
                list.head(self.list_display_limit).join(", ")
            ),
            Err(err) => self.storage_error_text("update your list", &err),
        }
    }

    pub(super) fn clear_text(&self) -> String {
        match self.products.clear() {
            Ok(true) => "🧹 List cleared!".to_string(),
            Ok(false) => "The list is already empty.".to_string(),
            Err(err) => self.storage_error_text("clear your list", &err),
        }
    }
}
