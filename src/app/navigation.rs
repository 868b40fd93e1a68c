//! Table and focus navigation

use movietui::logic;

use crate::App;

impl App {
    pub(crate) fn next_row(&mut self) {
        let len = self.controller.view().rows.len();
        self.ui.table_selection = logic::navigation::next_selection(self.ui.table_selection, len);
    }

    pub(crate) fn previous_row(&mut self) {
        let len = self.controller.view().rows.len();
        self.ui.table_selection = logic::navigation::prev_selection(self.ui.table_selection, len);
    }

    pub(crate) fn scroll_rows(&mut self, delta: i32) {
        let len = self.controller.view().rows.len();
        self.ui.table_selection =
            logic::navigation::scroll_selection(self.ui.table_selection, delta, len);
    }

    pub(crate) fn first_row(&mut self) {
        if !self.controller.view().rows.is_empty() {
            self.ui.table_selection = Some(0);
        }
    }

    pub(crate) fn last_row(&mut self) {
        let len = self.controller.view().rows.len();
        self.ui.table_selection = len.checked_sub(1);
    }

    /// Keep the highlighted row inside the (possibly shorter) table
    pub(crate) fn clamp_table_selection(&mut self) {
        let len = self.controller.view().rows.len();
        self.ui.table_selection = logic::navigation::clamp_selection(self.ui.table_selection, len);
    }

    /// Rows per page for PgUp/PgDn, from the last drawn table
    pub(crate) fn page_size(&self) -> i32 {
        self.layout
            .as_ref()
            .map(|layout| layout.table_area.height.saturating_sub(3).max(1) as i32)
            .unwrap_or(10)
    }

    pub(crate) fn focus_next(&mut self) {
        self.ui.focus = logic::ui::next_focus(self.ui.focus);
    }

    pub(crate) fn focus_prev(&mut self) {
        self.ui.focus = logic::ui::prev_focus(self.ui.focus);
    }
}
