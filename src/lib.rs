//! Movie table TUI library
//!
//! Exposes the dataset, model, logic and controller modules for testing

pub mod controller;
pub mod dataset;
pub mod logic;
pub mod model;

use std::str::FromStr;

/// Numeric column a table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    WorldwideGross,
    ReleaseYear,
}

impl SortColumn {
    pub fn as_str(&self) -> &str {
        match self {
            SortColumn::WorldwideGross => "Gross",
            SortColumn::ReleaseYear => "Year",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn arrow(&self) -> &str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// One of the four sort buttons (column + direction)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortKey {
    pub const GROSS_ASC: SortKey = SortKey::new(SortColumn::WorldwideGross, SortDirection::Ascending);
    pub const GROSS_DESC: SortKey = SortKey::new(SortColumn::WorldwideGross, SortDirection::Descending);
    pub const YEAR_ASC: SortKey = SortKey::new(SortColumn::ReleaseYear, SortDirection::Ascending);
    pub const YEAR_DESC: SortKey = SortKey::new(SortColumn::ReleaseYear, SortDirection::Descending);

    /// Sort buttons in the order they are laid out on screen
    pub const BUTTONS: [SortKey; 4] = [
        SortKey::GROSS_ASC,
        SortKey::GROSS_DESC,
        SortKey::YEAR_ASC,
        SortKey::YEAR_DESC,
    ];

    pub const fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Button label, e.g. "Gross ↓"
    pub fn label(&self) -> String {
        format!("{} {}", self.column.as_str(), self.direction.arrow())
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    /// Parse config values like `gross_desc` or `year_asc`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gross_asc" => Ok(SortKey::GROSS_ASC),
            "gross_desc" => Ok(SortKey::GROSS_DESC),
            "year_asc" => Ok(SortKey::YEAR_ASC),
            "year_desc" => Ok(SortKey::YEAR_DESC),
            other => anyhow::bail!(
                "Unknown sort '{}' (expected gross_asc, gross_desc, year_asc or year_desc)",
                other
            ),
        }
    }
}
