//! UI Model
//!
//! This sub-model contains all state related to the terminal interface:
//! focus, the dropdown popup, table selection and notifications.

use std::time::Instant;

use crate::logic::options::ListField;

/// Control that receives keyboard input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    Director,
    Country,
    YearLow,
    YearHigh,
    GrossLow,
    GrossHigh,
    #[default]
    Table,
}

/// Open dropdown popup
///
/// Row 0 is "All" (no filter); rows `1..` are the field's options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownState {
    pub field: ListField,
    pub selected_index: Option<usize>,
}

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    // ============================================
    // FOCUS & SELECTION
    // ============================================
    /// Control receiving keys
    pub focus: Focus,

    /// Highlighted table row
    pub table_selection: Option<usize>,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Open director/country dropdown
    pub dropdown: Option<DropdownState>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            focus: Focus::default(),
            table_selection: None,
            dropdown: None,
            toast_message: None,
            should_quit: false,
        }
    }

    pub fn has_modal(&self) -> bool {
        self.dropdown.is_some()
    }

    /// Open the dropdown for `field`, highlighting the current selection
    pub fn open_dropdown(&mut self, field: ListField, options: &[String], current: Option<&str>) {
        let selected_index = current
            .and_then(|value| options.iter().position(|o| o == value))
            .map(|idx| idx + 1)
            .or(Some(0));
        self.dropdown = Some(DropdownState {
            field,
            selected_index,
        });
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown = None;
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

/// Map a dropdown row back to a filter value (row 0 = no filter)
pub fn dropdown_value(options: &[String], row: usize) -> Option<String> {
    row.checked_sub(1).and_then(|idx| options.get(idx).cloned())
}
