//! Application controller
//!
//! Owns the application state and drives a [`MovieListView`]. Every user
//! action (apply, reset, sort, pointer events on the range selectors) goes
//! through one method here; the controller recomputes the visible rows and
//! hands them to the view. Nothing in here knows about the terminal.

use crate::dataset::MovieRecord;
use crate::logic::range::Handle;
use crate::logic::{filter, options, sorting};
use crate::model::{Axis, DragSession, FilterState, Model, SortState};
use crate::SortKey;

/// Rendering surface for the movie table
pub trait MovieListView {
    /// Replace the table body with `rows`
    fn render_rows(&mut self, rows: &[MovieRecord]);

    /// Update the low/high displays of a range selector
    fn show_range(&mut self, _axis: Axis, _low: i64, _high: i64) {}
}

pub struct Controller<V: MovieListView> {
    model: Model,
    view: V,
}

impl<V: MovieListView> Controller<V> {
    /// Create an empty controller waiting for the dataset
    pub fn new(view: V) -> Self {
        Self {
            model: Model::new(),
            view,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Initialize from the loaded dataset and render every movie
    ///
    /// Option sets and selector domains are computed here, once.
    pub fn load(&mut self, movies: Vec<MovieRecord>, track_width: u16) {
        for axis in Axis::ALL {
            let (min, max) = options::domain_bounds(&movies, axis);
            self.model.filters.selector_mut(axis).initialize(min, max, track_width);
        }
        self.model.dataset.set_movies(movies);
        self.model.filters.drag = DragSession::Idle;

        for axis in Axis::ALL {
            self.show_range(axis);
        }
        self.refresh();
    }

    /// Record a failed load; the controller stays inert afterwards
    pub fn load_failed(&mut self, message: String) {
        self.model.dataset.set_failed(message);
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_loaded()
    }

    pub fn filter_state(&self) -> FilterState {
        self.model.filter_state()
    }

    /// Rows the current filters and sort produce
    pub fn visible_rows(&self) -> Vec<MovieRecord> {
        let filtered = filter::filter(&self.model.dataset.movies, &self.model.filter_state());
        sorting::sort(filtered, &self.model.filters.sort)
    }

    /// Recompute the visible rows and render them
    pub fn refresh(&mut self) {
        if !self.is_loaded() {
            return;
        }
        let rows = self.visible_rows();
        self.view.render_rows(&rows);
    }

    /// Change the director dropdown; takes effect on the next apply or drag
    pub fn select_director(&mut self, director: Option<String>) {
        self.model.filters.director = director;
    }

    /// Change the country dropdown; takes effect on the next apply or drag
    pub fn select_country(&mut self, country: Option<String>) {
        self.model.filters.country = country;
    }

    pub fn apply(&mut self) {
        self.refresh();
    }

    /// Clear director and country; the sort and ranges stay as they are
    pub fn reset(&mut self) {
        self.model.filters.director = None;
        self.model.filters.country = None;
        self.refresh();
    }

    /// Clear every filter including both ranges; the sort stays
    pub fn reset_all(&mut self) {
        self.model.filters.director = None;
        self.model.filters.country = None;
        self.end_drag_session();
        for axis in Axis::ALL {
            self.model.filters.selector_mut(axis).reset();
            self.show_range(axis);
        }
        self.refresh();
    }

    /// Activate a sort button, replacing any previous sort
    pub fn select_sort(&mut self, key: SortKey) {
        self.model.filters.sort.active = Some(key);
        self.refresh();
    }

    pub fn sort_state(&self) -> SortState {
        self.model.filters.sort
    }

    pub fn drag_session(&self) -> DragSession {
        self.model.filters.drag
    }

    /// Pointer pressed on a handle: start a drag session
    ///
    /// If the two handles touch, `handle` is provisional: the first movement
    /// decides which one is dragged (see [`RangeSelector::grab`]).
    ///
    /// [`RangeSelector::grab`]: crate::logic::range::RangeSelector::grab
    pub fn pointer_down(&mut self, axis: Axis, handle: Handle, pointer_x: i32) {
        if !self.is_loaded() {
            return;
        }
        self.end_drag_session();
        self.model.filters.selector_mut(axis).grab(handle, pointer_x);
        self.model.filters.drag = DragSession::Dragging { axis, handle };
    }

    /// Pointer moved anywhere on screen
    ///
    /// While dragging, moves the handle and re-filters on every move.
    /// Returns `true` if a drag was in progress.
    pub fn pointer_move(&mut self, pointer_x: i32) -> bool {
        let (axis, handle) = match self.model.filters.drag {
            DragSession::Dragging { axis, handle } => (axis, handle),
            DragSession::Idle => return false,
        };

        let selector = self.model.filters.selector_mut(axis);
        let moved = selector.continue_drag(handle, pointer_x);
        if let Some(dragged) = selector.dragging_handle() {
            self.model.filters.drag = DragSession::Dragging {
                axis,
                handle: dragged,
            };
        }

        if moved {
            self.show_range(axis);
            self.refresh();
        }
        true
    }

    /// Pointer released: the drag ends where it is
    pub fn pointer_up(&mut self) {
        self.end_drag_session();
    }

    /// Pointer left the viewport: the drag ends where it is
    pub fn pointer_leave(&mut self) {
        self.end_drag_session();
    }

    /// Move a handle by `delta` track cells from the keyboard
    pub fn nudge(&mut self, axis: Axis, handle: Handle, delta: i32) -> bool {
        if !self.is_loaded() || self.model.filters.drag.is_dragging() {
            return false;
        }
        let changed = self.model.filters.selector_mut(axis).nudge(handle, delta);
        if changed {
            self.show_range(axis);
            self.refresh();
        }
        changed
    }

    /// The track width changed (terminal resize); values are kept
    ///
    /// A drag in progress is ended, since its anchor was measured on the old track.
    pub fn resize_tracks(&mut self, track_width: u16) {
        let changed = Axis::ALL
            .iter()
            .any(|axis| self.model.filters.selector(*axis).track_width() != track_width);
        if !changed {
            return;
        }

        self.end_drag_session();
        for axis in Axis::ALL {
            self.model.filters.selector_mut(axis).resize(track_width);
        }
    }

    /// Track width both selectors currently use
    pub fn track_width(&self) -> u16 {
        self.model.filters.year.track_width()
    }

    fn end_drag_session(&mut self) {
        if let DragSession::Dragging { axis, .. } = self.model.filters.drag {
            self.model.filters.selector_mut(axis).end_drag();
        }
        self.model.filters.drag = DragSession::Idle;
    }

    fn show_range(&mut self, axis: Axis) {
        let range = self.model.filters.selector(axis).range();
        self.view.show_range(axis, range.low, range.high);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValueRange;

    #[derive(Default)]
    struct RecordingView {
        renders: Vec<Vec<String>>,
        ranges: Vec<(Axis, i64, i64)>,
    }

    impl MovieListView for RecordingView {
        fn render_rows(&mut self, rows: &[MovieRecord]) {
            self.renders
                .push(rows.iter().map(|m| m.title.clone()).collect());
        }

        fn show_range(&mut self, axis: Axis, low: i64, high: i64) {
            self.ranges.push((axis, low, high));
        }
    }

    fn movie(title: &str, gross: u64, year: i32, director: &str, country: &str) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            worldwide_gross: gross,
            release_year: year,
            director: vec![director.to_string()],
            country: vec![country.to_string()],
        }
    }

    fn loaded() -> Controller<RecordingView> {
        let mut controller = Controller::new(RecordingView::default());
        controller.load(
            vec![
                movie("A", 100, 2000, "X", "US"),
                movie("B", 200, 2010, "Y", "UK"),
            ],
            10,
        );
        controller
    }

    fn last_render(controller: &Controller<RecordingView>) -> Vec<String> {
        controller.view().renders.last().cloned().unwrap_or_default()
    }

    #[test]
    fn test_load_renders_everything() {
        let controller = loaded();
        assert_eq!(last_render(&controller), vec!["A", "B"]);
        assert!(controller.view().ranges.contains(&(Axis::Year, 2000, 2010)));
        assert!(controller.view().ranges.contains(&(Axis::Gross, 100, 200)));
    }

    #[test]
    fn test_not_loaded_is_inert() {
        let mut controller = Controller::new(RecordingView::default());
        controller.load_failed("Dataset not found".to_string());
        controller.apply();
        controller.select_sort(SortKey::GROSS_ASC);
        controller.pointer_down(Axis::Year, Handle::Low, 0);
        assert!(!controller.pointer_move(5));
        assert!(controller.view().renders.is_empty());
    }

    #[test]
    fn test_director_takes_effect_on_apply() {
        let mut controller = loaded();
        controller.select_director(Some("X".to_string()));
        assert_eq!(controller.view().renders.len(), 1);

        controller.apply();
        assert_eq!(last_render(&controller), vec!["A"]);
    }

    #[test]
    fn test_sort_replaces_previous() {
        let mut controller = loaded();
        controller.select_sort(SortKey::GROSS_DESC);
        assert_eq!(last_render(&controller), vec!["B", "A"]);

        controller.select_sort(SortKey::YEAR_ASC);
        assert_eq!(controller.sort_state().active, Some(SortKey::YEAR_ASC));
        assert_eq!(last_render(&controller), vec!["A", "B"]);
    }

    #[test]
    fn test_drag_session_transitions() {
        let mut controller = loaded();
        assert_eq!(controller.drag_session(), DragSession::Idle);

        controller.pointer_down(Axis::Year, Handle::High, 50);
        assert_eq!(
            controller.drag_session(),
            DragSession::Dragging {
                axis: Axis::Year,
                handle: Handle::High
            }
        );

        // Far outside the track: still tracked, clamped at low
        assert!(controller.pointer_move(-200));
        assert_eq!(controller.filter_state().year_range.high, 2000);
        assert_eq!(last_render(&controller), vec!["A"]);

        controller.pointer_leave();
        assert_eq!(controller.drag_session(), DragSession::Idle);
        assert!(!controller.pointer_move(100));
        assert_eq!(controller.filter_state().year_range.high, 2000);
    }

    #[test]
    fn test_every_drag_move_rerenders() {
        let mut controller = loaded();
        let before = controller.view().renders.len();

        controller.pointer_down(Axis::Gross, Handle::Low, 0);
        controller.pointer_move(1);
        controller.pointer_move(2);
        controller.pointer_up();

        assert_eq!(controller.view().renders.len(), before + 2);
        assert_eq!(controller.filter_state().gross_range.low, 120);
        assert_eq!(controller.view().ranges.last(), Some(&(Axis::Gross, 120, 200)));
    }

    #[test]
    fn test_touching_handles_drag_left_moves_low() {
        let mut controller = loaded();
        controller.nudge(Axis::Year, Handle::High, -5);
        controller.nudge(Axis::Year, Handle::Low, 5);
        assert_eq!(controller.filter_state().year_range, ValueRange::new(2005, 2005));

        // Hit-testing reports the high handle for touching handles mid-track
        controller.pointer_down(Axis::Year, Handle::High, 30);
        assert!(controller.pointer_move(27));
        assert_eq!(
            controller.drag_session(),
            DragSession::Dragging {
                axis: Axis::Year,
                handle: Handle::Low
            }
        );
        assert_eq!(controller.filter_state().year_range, ValueRange::new(2002, 2005));
        controller.pointer_up();

        assert_eq!(controller.filter_state().year_range, ValueRange::new(2002, 2005));
        assert_eq!(controller.drag_session(), DragSession::Idle);
    }

    #[test]
    fn test_nudge_blocked_while_dragging() {
        let mut controller = loaded();
        controller.pointer_down(Axis::Year, Handle::Low, 0);
        assert!(!controller.nudge(Axis::Year, Handle::Low, 1));
        controller.pointer_up();
        assert!(controller.nudge(Axis::Year, Handle::Low, 1));
        assert_eq!(controller.filter_state().year_range.low, 2001);
    }

    #[test]
    fn test_reset_keeps_ranges() {
        let mut controller = loaded();
        controller.nudge(Axis::Year, Handle::Low, 5);
        controller.select_country(Some("US".to_string()));
        controller.reset();

        let state = controller.filter_state();
        assert!(state.country.is_none());
        assert_eq!(state.year_range.low, 2005);
        assert_eq!(last_render(&controller), vec!["B"]);
    }

    #[test]
    fn test_reset_all_restores_ranges_and_keeps_sort() {
        let mut controller = loaded();
        controller.select_sort(SortKey::YEAR_DESC);
        controller.nudge(Axis::Year, Handle::Low, 5);
        controller.select_director(Some("Y".to_string()));
        controller.reset_all();

        assert_eq!(controller.filter_state().year_range.low, 2000);
        assert_eq!(controller.sort_state().active, Some(SortKey::YEAR_DESC));
        assert_eq!(last_render(&controller), vec!["B", "A"]);
    }

    #[test]
    fn test_resize_tracks_keeps_values() {
        let mut controller = loaded();
        controller.nudge(Axis::Year, Handle::High, -3);
        controller.resize_tracks(20);
        assert_eq!(controller.filter_state().year_range.high, 2007);
        assert_eq!(controller.model().filters.year.high_offset(), 14);
    }
}
