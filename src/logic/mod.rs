//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Dataset load error classification
//! - filter: Filter predicate over movie records
//! - formatting: Number and list formatting for display
//! - layout: Slider track geometry and button placement
//! - navigation: Dropdown and table selection movement
//! - options: Dropdown option sets and range domains from the dataset
//! - range: Dual-handle range selector
//! - sorting: Movie comparison by numeric column
//! - ui: Focus cycling and key mapping

pub mod errors;
pub mod filter;
pub mod formatting;
pub mod layout;
pub mod navigation;
pub mod options;
pub mod range;
pub mod sorting;
pub mod ui;
