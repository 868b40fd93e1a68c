//! Pure Application Model
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **DatasetModel**: Loaded movies, option sets, load state
//! - **FilterModel**: Dropdown selections, range selectors, sort, drag session
//! - **UiModel**: Focus, popups, notifications (terminal only)
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the binary
//! - Pure accessors: Helper methods are side-effect free

pub mod dataset;
pub mod filters;
pub mod types;
pub mod ui;

pub use dataset::DatasetModel;
pub use filters::FilterModel;
pub use types::*;
pub use ui::UiModel;

/// State owned by the controller
#[derive(Clone, Debug, Default)]
pub struct Model {
    /// Loaded movies and option sets
    pub dataset: DatasetModel,

    /// Filters, sort and drag
    pub filters: FilterModel,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current filters as a snapshot
    pub fn filter_state(&self) -> FilterState {
        self.filters.filter_state()
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_loaded()
    }
}
