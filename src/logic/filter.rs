//! Filter predicate
//!
//! Pure functions deciding which movies pass the current filter state.

use crate::dataset::MovieRecord;
use crate::model::types::FilterState;

/// Check whether a single movie passes every filter
///
/// A movie matches iff the director filter is unset or names one of its
/// directors, the country filter is unset or names one of its countries, and
/// both its release year and worldwide gross fall inside the selected ranges
/// (inclusive at both ends).
pub fn matches(movie: &MovieRecord, state: &FilterState) -> bool {
    let director_ok = state
        .director
        .as_ref()
        .map_or(true, |d| movie.director.iter().any(|m| m == d));
    let country_ok = state
        .country
        .as_ref()
        .map_or(true, |c| movie.country.iter().any(|m| m == c));

    director_ok
        && country_ok
        && state.year_range.contains(movie.release_year as i64)
        && state.gross_range.contains(movie.gross())
}

/// Filter a list of movies, preserving their order
///
/// Returns a new list; the input is never modified.
pub fn filter(records: &[MovieRecord], state: &FilterState) -> Vec<MovieRecord> {
    records
        .iter()
        .filter(|movie| matches(movie, state))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::ValueRange;

    fn movie(title: &str, gross: u64, year: i32, directors: &[&str], countries: &[&str]) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            worldwide_gross: gross,
            release_year: year,
            director: directors.iter().map(|s| s.to_string()).collect(),
            country: countries.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn sample() -> Vec<MovieRecord> {
        vec![
            movie("A", 100, 2000, &["X"], &["US"]),
            movie("B", 200, 2010, &["Y"], &["UK"]),
            movie("C", 150, 2005, &["X", "Y"], &["US", "UK"]),
            movie("D", 50, 1995, &[], &["FR"]),
        ]
    }

    fn permissive() -> FilterState {
        FilterState::permissive(ValueRange::new(1995, 2010), ValueRange::new(50, 200))
    }

    fn titles(records: &[MovieRecord]) -> Vec<&str> {
        records.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_filter_permissive_returns_input() {
        let records = sample();
        assert_eq!(filter(&records, &permissive()), records);
    }

    #[test]
    fn test_filter_by_director() {
        let state = FilterState {
            director: Some("X".to_string()),
            ..permissive()
        };
        assert_eq!(titles(&filter(&sample(), &state)), vec!["A", "C"]);
    }

    #[test]
    fn test_filter_by_country_multi_valued() {
        let state = FilterState {
            country: Some("UK".to_string()),
            ..permissive()
        };
        assert_eq!(titles(&filter(&sample(), &state)), vec!["B", "C"]);
    }

    #[test]
    fn test_filter_director_and_country_combined() {
        let state = FilterState {
            director: Some("Y".to_string()),
            country: Some("US".to_string()),
            ..permissive()
        };
        assert_eq!(titles(&filter(&sample(), &state)), vec!["C"]);
    }

    #[test]
    fn test_filter_movie_without_directors_never_matches_director() {
        let state = FilterState {
            director: Some(String::new()),
            ..permissive()
        };
        assert!(filter(&sample(), &state).is_empty());
    }

    #[test]
    fn test_filter_ranges_inclusive() {
        let state = FilterState {
            year_range: ValueRange::new(2000, 2005),
            gross_range: ValueRange::new(100, 150),
            ..permissive()
        };
        assert_eq!(titles(&filter(&sample(), &state)), vec!["A", "C"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let state = FilterState {
            country: Some("US".to_string()),
            year_range: ValueRange::new(2001, 2010),
            ..permissive()
        };
        let once = filter(&sample(), &state);
        let twice = filter(&once, &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let records = sample();
        let state = FilterState {
            director: Some("Y".to_string()),
            ..permissive()
        };
        let _ = filter(&records, &state);
        assert_eq!(records, sample());
    }
}
