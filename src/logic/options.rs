//! Dataset-derived option sets and bounds
//!
//! Dropdown choices and range-selector domains are computed once from the
//! full dataset when it loads.

use crate::dataset::MovieRecord;
use crate::model::types::Axis;
use std::collections::HashSet;

/// Multi-valued text field a dropdown is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Director,
    Country,
}

impl ListField {
    pub fn label(&self) -> &str {
        match self {
            ListField::Director => "Director",
            ListField::Country => "Country",
        }
    }

    fn values<'a>(&self, movie: &'a MovieRecord) -> &'a [String] {
        match self {
            ListField::Director => &movie.director,
            ListField::Country => &movie.country,
        }
    }
}

/// Distinct values of a list field, in the order they are first seen
///
/// # Examples
/// ```
/// use movietui::dataset::MovieRecord;
/// use movietui::logic::options::{unique_values, ListField};
///
/// let movies = vec![
///     MovieRecord {
///         title: "A".into(), worldwide_gross: 1, release_year: 2000,
///         director: vec!["X".into(), "Y".into()], country: vec!["US".into()],
///     },
///     MovieRecord {
///         title: "B".into(), worldwide_gross: 2, release_year: 2001,
///         director: vec!["Y".into(), "Z".into()], country: vec!["US".into()],
///     },
/// ];
/// assert_eq!(unique_values(&movies, ListField::Director), vec!["X", "Y", "Z"]);
/// assert_eq!(unique_values(&movies, ListField::Country), vec!["US"]);
/// ```
pub fn unique_values(records: &[MovieRecord], field: ListField) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();

    for movie in records {
        for value in field.values(movie) {
            if seen.insert(value.as_str()) {
                values.push(value.clone());
            }
        }
    }

    values
}

/// Numeric value of a movie on a range axis
pub fn axis_value(movie: &MovieRecord, axis: Axis) -> i64 {
    match axis {
        Axis::Year => movie.release_year as i64,
        Axis::Gross => movie.gross(),
    }
}

/// `(min, max)` of an axis across the dataset; `(0, 0)` when it is empty
pub fn domain_bounds(records: &[MovieRecord], axis: Axis) -> (i64, i64) {
    let mut values = records.iter().map(|movie| axis_value(movie, axis));

    match values.next() {
        Some(first) => values.fold((first, first), |(min, max), v| (min.min(v), max.max(v))),
        None => (0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(gross: u64, year: i32, directors: &[&str]) -> MovieRecord {
        MovieRecord {
            title: format!("{}", year),
            worldwide_gross: gross,
            release_year: year,
            director: directors.iter().map(|s| s.to_string()).collect(),
            country: vec!["US".to_string()],
        }
    }

    #[test]
    fn test_unique_values_first_seen_order() {
        let movies = vec![movie(1, 2000, &["Nolan"]), movie(2, 2001, &["Cameron", "Nolan"])];
        assert_eq!(unique_values(&movies, ListField::Director), vec!["Nolan", "Cameron"]);
    }

    #[test]
    fn test_unique_values_empty() {
        assert!(unique_values(&[], ListField::Country).is_empty());
    }

    #[test]
    fn test_domain_bounds() {
        let movies = vec![
            movie(2_847_246_203, 2009, &["Cameron"]),
            movie(1_000, 1997, &["Cameron"]),
            movie(500_000, 2019, &["Russo"]),
        ];
        assert_eq!(domain_bounds(&movies, Axis::Year), (1997, 2019));
        assert_eq!(domain_bounds(&movies, Axis::Gross), (1_000, 2_847_246_203));
    }

    #[test]
    fn test_domain_bounds_empty_dataset() {
        assert_eq!(domain_bounds(&[], Axis::Year), (0, 0));
    }

    #[test]
    fn test_domain_bounds_single_movie() {
        let movies = vec![movie(42, 2001, &["X"])];
        assert_eq!(domain_bounds(&movies, Axis::Gross), (42, 42));
    }
}
