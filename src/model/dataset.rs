//! Dataset Model
//!
//! The loaded movie list and everything derived from it once at load time.

use super::types::LoadState;
use crate::dataset::MovieRecord;
use crate::logic::options::{self, ListField};

/// Loaded dataset and dropdown option sets
#[derive(Clone, Debug, Default)]
pub struct DatasetModel {
    /// Every record, in source order
    pub movies: Vec<MovieRecord>,

    /// Distinct directors, first-seen order
    pub directors: Vec<String>,

    /// Distinct countries, first-seen order
    pub countries: Vec<String>,

    /// Where the one-shot load stands
    pub load_state: LoadState,
}

impl DatasetModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the dataset and compute the option sets
    pub fn set_movies(&mut self, movies: Vec<MovieRecord>) {
        self.directors = options::unique_values(&movies, ListField::Director);
        self.countries = options::unique_values(&movies, ListField::Country);
        self.movies = movies;
        self.load_state = LoadState::Loaded;
    }

    pub fn set_failed(&mut self, message: String) {
        self.load_state = LoadState::Failed { message };
    }

    pub fn is_loaded(&self) -> bool {
        self.load_state == LoadState::Loaded
    }

    /// Dropdown options for a field
    pub fn options(&self, field: ListField) -> &[String] {
        match field {
            ListField::Director => &self.directors,
            ListField::Country => &self.countries,
        }
    }
}
