//! Sort button orchestration

use movietui::SortKey;

use crate::{log_debug, App};

impl App {
    /// Activate a sort button; the table re-sorts immediately
    pub(crate) fn select_sort(&mut self, key: SortKey) {
        if !self.controller.is_loaded() {
            return;
        }
        self.controller.select_sort(key);
        log_debug(&format!("Sort -> {}", key.label()));
        self.ui.show_toast(format!("Sorted by {}", key.label()));
    }
}
