//! Filter Model
//!
//! This sub-model contains everything that decides which rows the table
//! shows and in what order: dropdown selections, both range selectors,
//! the active sort and the pointer drag session.

use super::types::{Axis, DragSession, FilterState, SortState};
use crate::logic::range::RangeSelector;

/// Filter, sort and drag state
#[derive(Clone, Debug, Default)]
pub struct FilterModel {
    /// Selected director (None = all)
    pub director: Option<String>,

    /// Selected country (None = all)
    pub country: Option<String>,

    /// Release year selector
    pub year: RangeSelector,

    /// Worldwide gross selector
    pub gross: RangeSelector,

    /// Active sort button
    pub sort: SortState,

    /// Which handle, if any, the pointer is dragging
    pub drag: DragSession,
}

impl FilterModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selector(&self, axis: Axis) -> &RangeSelector {
        match axis {
            Axis::Year => &self.year,
            Axis::Gross => &self.gross,
        }
    }

    pub fn selector_mut(&mut self, axis: Axis) -> &mut RangeSelector {
        match axis {
            Axis::Year => &mut self.year,
            Axis::Gross => &mut self.gross,
        }
    }

    /// Read the current filters off the dropdowns and selectors
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            director: self.director.clone(),
            country: self.country.clone(),
            year_range: self.year.range(),
            gross_range: self.gross.range(),
        }
    }

    /// Whether any filter narrows the dataset
    pub fn is_filtering(&self) -> bool {
        self.director.is_some()
            || self.country.is_some()
            || !self.year.is_full_range()
            || !self.gross.is_full_range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::range::Handle;
    use crate::model::types::ValueRange;

    #[test]
    fn test_filter_model_creation() {
        let model = FilterModel::new();
        assert!(model.director.is_none());
        assert!(model.country.is_none());
        assert_eq!(model.sort, SortState::none());
        assert_eq!(model.drag, DragSession::Idle);
        assert!(!model.is_filtering());
    }

    #[test]
    fn test_filter_state_reads_selectors() {
        let mut model = FilterModel::new();
        model.year.initialize(2000, 2010, 10);
        model.gross.initialize(100, 200, 10);
        model.year.nudge(Handle::Low, 2);
        model.country = Some("UK".to_string());

        let state = model.filter_state();
        assert_eq!(state.year_range, ValueRange::new(2002, 2010));
        assert_eq!(state.gross_range, ValueRange::new(100, 200));
        assert_eq!(state.country.as_deref(), Some("UK"));
        assert!(state.director.is_none());
        assert!(model.is_filtering());
    }

    #[test]
    fn test_selector_mut_targets_axis() {
        let mut model = FilterModel::new();
        model.selector_mut(Axis::Gross).initialize(1, 5, 4);
        assert_eq!(model.selector(Axis::Gross).domain_max(), 5);
        assert_eq!(model.selector(Axis::Year).domain_max(), 0);
    }
}
