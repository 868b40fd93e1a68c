//! Dropdown and Apply/Reset orchestration
//!
//! Director/country choices are staged on the controller and only reach the
//! table on the next Apply (or the next handle drag/nudge, which re-filters).

use movietui::logic::navigation::scroll_selection;
use movietui::logic::options::ListField;
use movietui::model::ui::dropdown_value;

use crate::{log_debug, App};

impl App {
    pub(crate) fn apply_filters(&mut self) {
        if !self.controller.is_loaded() {
            return;
        }
        self.controller.apply();
        self.clamp_table_selection();
        let shown = self.controller.view().rows.len();
        log_debug(&format!("Apply: {:?} -> {} rows", self.controller.filter_state(), shown));
        self.ui.show_toast(format!("{} movies match", shown));
    }

    /// Clear director and country; keeps the sort and both ranges
    pub(crate) fn reset_filters(&mut self) {
        if !self.controller.is_loaded() {
            return;
        }
        self.controller.reset();
        self.clamp_table_selection();
        log_debug("Reset director/country");
        self.ui.show_toast("Filters reset".to_string());
    }

    /// Clear every filter including both ranges; keeps the sort
    pub(crate) fn reset_all_filters(&mut self) {
        if !self.controller.is_loaded() {
            return;
        }
        self.controller.reset_all();
        self.clamp_table_selection();
        log_debug("Reset all filters");
        self.ui.show_toast("All filters reset".to_string());
    }

    pub(crate) fn open_dropdown(&mut self, field: ListField) {
        if !self.controller.is_loaded() {
            return;
        }
        let model = self.controller.model();
        let current = match field {
            ListField::Director => model.filters.director.as_deref(),
            ListField::Country => model.filters.country.as_deref(),
        };
        self.ui
            .open_dropdown(field, model.dataset.options(field), current);
        self.dropdown_popup = None;
    }

    pub(crate) fn close_dropdown(&mut self) {
        self.ui.close_dropdown();
        self.dropdown_popup = None;
    }

    /// Move the dropdown highlight by `delta` rows (clamped, "All" included)
    pub(crate) fn move_dropdown_selection(&mut self, delta: i32) {
        let Some(field) = self.ui.dropdown.as_ref().map(|d| d.field) else {
            return;
        };
        let rows = self.controller.model().dataset.options(field).len() + 1;
        if let Some(dropdown) = self.ui.dropdown.as_mut() {
            dropdown.selected_index = scroll_selection(dropdown.selected_index, delta, rows);
        }
    }

    /// Commit the highlighted dropdown row (or `row` when clicked) and close
    pub(crate) fn confirm_dropdown(&mut self, row: Option<usize>) {
        let Some(dropdown) = self.ui.dropdown.clone() else {
            return;
        };
        let Some(row) = row.or(dropdown.selected_index) else {
            self.close_dropdown();
            return;
        };

        let value = dropdown_value(self.controller.model().dataset.options(dropdown.field), row);
        log_debug(&format!("{} dropdown -> {:?}", dropdown.field.label(), value));

        let shown = value.clone().unwrap_or_else(|| "All".to_string());
        match dropdown.field {
            ListField::Director => self.controller.select_director(value),
            ListField::Country => self.controller.select_country(value),
        }
        self.close_dropdown();
        self.ui.show_toast(format!(
            "{}: {} (press a to apply)",
            dropdown.field.label(),
            shown
        ));
    }
}
