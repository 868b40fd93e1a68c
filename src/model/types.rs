//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use crate::logic::range::Handle;
use crate::SortKey;

/// Which range selector an operation targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Year,
    Gross,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Year, Axis::Gross];

    pub fn label(&self) -> &str {
        match self {
            Axis::Year => "Year",
            Axis::Gross => "Gross",
        }
    }
}

/// Closed interval `[low, high]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueRange {
    pub low: i64,
    pub high: i64,
}

impl ValueRange {
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// Inclusive at both ends
    pub fn contains(&self, value: i64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Snapshot of every filter the table is currently subject to
///
/// `None` for director/country means "no filter".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub director: Option<String>,
    pub country: Option<String>,
    pub year_range: ValueRange,
    pub gross_range: ValueRange,
}

impl FilterState {
    /// A state that lets everything in the given ranges through
    pub fn permissive(year_range: ValueRange, gross_range: ValueRange) -> Self {
        Self {
            director: None,
            country: None,
            year_range,
            gross_range,
        }
    }
}

/// Active sort, if any. At most one sort button is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub active: Option<SortKey>,
}

impl SortState {
    pub fn none() -> Self {
        Self { active: None }
    }

    pub fn by(key: SortKey) -> Self {
        Self { active: Some(key) }
    }

    pub fn is_active(&self, key: SortKey) -> bool {
        self.active == Some(key)
    }

    pub fn as_str(&self) -> String {
        match self.active {
            Some(key) => key.label(),
            None => "None".to_string(),
        }
    }
}

/// Pointer drag state machine
///
/// `Idle --pointer_down--> Dragging --pointer_up | pointer_leave--> Idle`.
/// Moves while `Dragging` are honoured wherever the pointer is, not only over
/// the track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging { axis: Axis, handle: Handle },
}

impl DragSession {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }
}

/// Lifecycle of the one-shot dataset load
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed { message: String },
}
