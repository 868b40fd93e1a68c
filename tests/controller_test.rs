//! Tests for the controller driving a view
//!
//! Scenarios here follow a whole user interaction: load, pick filters,
//! sort, drag, reset. The view records what it was asked to render.

use movietui::controller::{Controller, MovieListView};
use movietui::dataset::MovieRecord;
use movietui::logic::range::Handle;
use movietui::model::{Axis, DragSession};
use movietui::SortKey;

#[derive(Default)]
struct TitlesView {
    rows: Vec<String>,
    render_count: usize,
}

impl MovieListView for TitlesView {
    fn render_rows(&mut self, rows: &[MovieRecord]) {
        self.rows = rows.iter().map(|m| m.title.clone()).collect();
        self.render_count += 1;
    }
}

fn movie(title: &str, gross: u64, year: i32, directors: &[&str], countries: &[&str]) -> MovieRecord {
    MovieRecord {
        title: title.to_string(),
        worldwide_gross: gross,
        release_year: year,
        director: directors.iter().map(|s| s.to_string()).collect(),
        country: countries.iter().map(|s| s.to_string()).collect(),
    }
}

fn dataset() -> Vec<MovieRecord> {
    vec![
        movie("Heat", 187_000_000, 1995, &["Michael Mann"], &["United States"]),
        movie("Collateral", 220_000_000, 2004, &["Michael Mann"], &["United States"]),
        movie("Amelie", 174_000_000, 2001, &["Jean-Pierre Jeunet"], &["France", "Germany"]),
        movie("Parasite", 262_000_000, 2019, &["Bong Joon-ho"], &["South Korea"]),
        movie("Oldboy", 15_000_000, 2003, &["Park Chan-wook"], &["South Korea"]),
    ]
}

fn loaded(track_width: u16) -> Controller<TitlesView> {
    let mut controller = Controller::new(TitlesView::default());
    controller.load(dataset(), track_width);
    controller
}

/// Test: reset clears director/country but the active sort stays applied
#[test]
fn test_reset_preserves_sort() {
    let mut controller = loaded(40);

    controller.select_sort(SortKey::GROSS_DESC);
    controller.select_country(Some("South Korea".to_string()));
    controller.apply();
    assert_eq!(controller.view().rows, vec!["Parasite", "Oldboy"]);

    controller.reset();
    assert_eq!(controller.sort_state().active, Some(SortKey::GROSS_DESC));
    assert_eq!(
        controller.view().rows,
        vec!["Parasite", "Collateral", "Heat", "Amelie", "Oldboy"]
    );
}

/// Test: a drag re-filters with the staged director choice as well
#[test]
fn test_drag_applies_staged_dropdown() {
    let mut controller = loaded(24);
    controller.select_director(Some("Michael Mann".to_string()));
    assert_eq!(controller.view().rows.len(), 5, "not applied yet");

    // Year domain 1995..=2019 over 24 cells: one cell per year
    controller.pointer_down(Axis::Year, Handle::Low, 100);
    assert!(controller.pointer_move(101));
    controller.pointer_up();

    assert_eq!(controller.filter_state().year_range.low, 1996);
    assert_eq!(controller.view().rows, vec!["Collateral"]);
}

/// Test: reset_all restores full ranges but keeps the sort
#[test]
fn test_reset_all_restores_ranges() {
    let mut controller = loaded(24);
    controller.select_sort(SortKey::YEAR_ASC);
    controller.nudge(Axis::Year, Handle::High, -10);
    assert_eq!(controller.filter_state().year_range.high, 2009);
    assert_eq!(controller.view().rows, vec!["Heat", "Amelie", "Oldboy", "Collateral"]);

    controller.reset_all();
    assert_eq!(controller.filter_state().year_range.high, 2019);
    assert_eq!(controller.sort_state().active, Some(SortKey::YEAR_ASC));
    assert_eq!(controller.view().rows.last().map(String::as_str), Some("Parasite"));
}

/// Test: a terminal resize mid-drag ends the drag and keeps the values
#[test]
fn test_resize_ends_drag_and_keeps_values() {
    let mut controller = loaded(24);
    controller.nudge(Axis::Year, Handle::Low, 6);
    let low = controller.filter_state().year_range.low;
    assert_eq!(low, 2001);

    controller.pointer_down(Axis::Gross, Handle::High, 30);
    controller.resize_tracks(48);

    assert_eq!(controller.drag_session(), DragSession::Idle);
    assert!(!controller.pointer_move(0));
    assert_eq!(controller.filter_state().year_range.low, low);
    assert_eq!(controller.model().filters.year.low_offset(), 12);
}

/// Test: resize to the same width is a no-op and does not end a drag
#[test]
fn test_resize_same_width_keeps_drag() {
    let mut controller = loaded(24);
    controller.pointer_down(Axis::Year, Handle::High, 30);
    controller.resize_tracks(24);
    assert!(controller.drag_session().is_dragging());
}

/// Test: an empty dataset loads with collapsed selectors and an empty table
#[test]
fn test_empty_dataset() {
    let mut controller = Controller::new(TitlesView::default());
    controller.load(Vec::new(), 30);

    assert!(controller.is_loaded());
    assert_eq!(controller.view().render_count, 1);
    assert!(controller.view().rows.is_empty());

    controller.pointer_down(Axis::Gross, Handle::High, 10);
    controller.pointer_move(0);
    assert_eq!(controller.filter_state().gross_range.low, 0);
    assert_eq!(controller.filter_state().gross_range.high, 0);
}
