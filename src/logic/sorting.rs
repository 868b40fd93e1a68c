//! Sorting comparison logic
//!
//! Pure functions for ordering movies by one of the numeric columns.

use crate::dataset::MovieRecord;
use crate::model::types::SortState;
use crate::{SortColumn, SortDirection, SortKey};
use std::cmp::Ordering;

/// Compare two movies according to the given sort key
///
/// # Arguments
/// * `a` - First movie
/// * `b` - Second movie
/// * `key` - Column and direction
///
/// # Returns
/// Ordering indicating relative position (Less, Equal, Greater). Movies with
/// equal values compare Equal; their relative order is left to the caller.
pub fn compare_movies(a: &MovieRecord, b: &MovieRecord, key: SortKey) -> Ordering {
    let result = match key.column {
        SortColumn::WorldwideGross => a.worldwide_gross.cmp(&b.worldwide_gross),
        SortColumn::ReleaseYear => a.release_year.cmp(&b.release_year),
    };

    match key.direction {
        SortDirection::Ascending => result,
        SortDirection::Descending => result.reverse(),
    }
}

/// Order movies by the active sort
///
/// With no active sort the list is returned unchanged, element for element.
pub fn sort(mut records: Vec<MovieRecord>, state: &SortState) -> Vec<MovieRecord> {
    if let Some(key) = state.active {
        records.sort_by(|a, b| compare_movies(a, b, key));
    }
    records
}
