//! Dual-handle range selector
//!
//! A bounded 1-D track with two linked handles. Each handle sits at a cell
//! offset on the track and maps to an integer domain value (a year or a gross
//! amount). The low handle can never pass the high handle and vice versa.

use crate::model::types::ValueRange;

/// Which end of the interval a handle controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Low,
    High,
}

/// Recorded at the start of a drag: where the handle and pointer were
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragAnchor {
    handle: Handle,
    start_offset: u16,
    start_pointer: i32,
    /// Handles were touching when grabbed; the first movement picks one
    undecided: bool,
}

/// Map a track offset to a domain value
///
/// `value = min + (offset / width) * (max - min)`, rounded to the nearest
/// integer. A zero-width track or an empty domain maps everything to `min`.
///
/// # Examples
/// ```
/// use movietui::logic::range::offset_to_value;
///
/// assert_eq!(offset_to_value(0, 10, 2000, 2010), 2000);
/// assert_eq!(offset_to_value(5, 10, 2000, 2010), 2005);
/// assert_eq!(offset_to_value(10, 10, 2000, 2010), 2010);
/// assert_eq!(offset_to_value(1, 3, 0, 100), 33);
/// assert_eq!(offset_to_value(3, 0, 7, 9), 7);
/// ```
pub fn offset_to_value(offset: u16, track_width: u16, domain_min: i64, domain_max: i64) -> i64 {
    if track_width == 0 || domain_min >= domain_max {
        return domain_min;
    }

    let ratio = offset.min(track_width) as f64 / track_width as f64;
    let span = (domain_max - domain_min) as f64;
    let value = (domain_min as f64 + ratio * span).round() as i64;
    value.clamp(domain_min, domain_max)
}

/// Map a domain value back to the nearest track offset
///
/// # Examples
/// ```
/// use movietui::logic::range::value_to_offset;
///
/// assert_eq!(value_to_offset(2000, 10, 2000, 2010), 0);
/// assert_eq!(value_to_offset(2004, 20, 2000, 2010), 8);
/// assert_eq!(value_to_offset(2010, 10, 2000, 2010), 10);
/// assert_eq!(value_to_offset(5, 10, 5, 5), 0);
/// ```
pub fn value_to_offset(value: i64, track_width: u16, domain_min: i64, domain_max: i64) -> u16 {
    if track_width == 0 || domain_min >= domain_max {
        return 0;
    }

    let clamped = value.clamp(domain_min, domain_max);
    let ratio = (clamped - domain_min) as f64 / (domain_max - domain_min) as f64;
    let offset = (ratio * track_width as f64).round() as i64;
    offset.clamp(0, track_width as i64) as u16
}

/// Range selector state for one axis
///
/// Invariants, held after construction and after every method:
/// - `domain_min <= low_value <= high_value <= domain_max`
/// - `0 <= low_offset <= high_offset <= track_width`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSelector {
    domain_min: i64,
    domain_max: i64,
    low_value: i64,
    high_value: i64,
    low_offset: u16,
    high_offset: u16,
    track_width: u16,
    anchor: Option<DragAnchor>,
}

impl Default for RangeSelector {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl RangeSelector {
    /// Create a selector spanning the whole domain
    pub fn new(domain_min: i64, domain_max: i64, track_width: u16) -> Self {
        let mut selector = Self {
            domain_min: 0,
            domain_max: 0,
            low_value: 0,
            high_value: 0,
            low_offset: 0,
            high_offset: 0,
            track_width: 0,
            anchor: None,
        };
        selector.initialize(domain_min, domain_max, track_width);
        selector
    }

    /// Set the domain and put both handles at its extremes
    ///
    /// Bounds given in the wrong order are swapped. When the domain is a single
    /// value, or the track has no width, both handles collapse to offset 0 and
    /// drags have no effect.
    pub fn initialize(&mut self, domain_min: i64, domain_max: i64, track_width: u16) {
        let (min, max) = if domain_min <= domain_max {
            (domain_min, domain_max)
        } else {
            (domain_max, domain_min)
        };

        self.domain_min = min;
        self.domain_max = max;
        self.low_value = min;
        self.high_value = max;
        self.track_width = track_width;
        self.anchor = None;

        self.low_offset = 0;
        self.high_offset = if self.is_collapsed() { 0 } else { track_width };
    }

    /// Whether the pixel/value mapping is degenerate (no movement possible)
    pub fn is_collapsed(&self) -> bool {
        self.track_width == 0 || self.domain_min == self.domain_max
    }

    /// Start dragging `handle` with the pointer at `pointer_x`
    pub fn begin_drag(&mut self, handle: Handle, pointer_x: i32) {
        self.anchor = Some(DragAnchor {
            handle,
            start_offset: self.offset(handle),
            start_pointer: pointer_x,
            undecided: false,
        });
    }

    /// Start a pointer drag of `handle`, letting direction decide a tie
    ///
    /// Like [`begin_drag`](Self::begin_drag), except that when both handles
    /// share an offset the handle that actually moves is chosen by the first
    /// non-zero pointer movement: leftwards drags the low handle, rightwards
    /// the high one. Until then [`dragging_handle`](Self::dragging_handle)
    /// reports `handle`.
    pub fn grab(&mut self, handle: Handle, pointer_x: i32) {
        self.begin_drag(handle, pointer_x);
        let undecided = !self.is_collapsed() && self.low_offset == self.high_offset;
        if let Some(anchor) = self.anchor.as_mut() {
            anchor.undecided = undecided;
        }
    }

    /// Move the dragged handle to follow the pointer
    ///
    /// The proposed offset is clamped so the handles never cross: the low
    /// handle stays within `[0, high_offset]`, the high handle within
    /// `[low_offset, track_width]`. Returns `true` if a drag of `handle` is
    /// in progress and the selector is not collapsed. After a [`grab`](Self::grab)
    /// of touching handles either handle is accepted until the direction is
    /// known.
    pub fn continue_drag(&mut self, handle: Handle, pointer_x: i32) -> bool {
        let mut anchor = match self.anchor {
            Some(anchor) if anchor.handle == handle || anchor.undecided => anchor,
            _ => return false,
        };

        if self.is_collapsed() {
            return false;
        }

        let delta = pointer_x as i64 - anchor.start_pointer as i64;
        if anchor.undecided {
            if delta == 0 {
                return true;
            }
            anchor.handle = if delta < 0 { Handle::Low } else { Handle::High };
            anchor.undecided = false;
            self.anchor = Some(anchor);
        }

        let proposed = anchor.start_offset as i64 + delta;

        match anchor.handle {
            Handle::Low => {
                let offset = proposed.clamp(0, self.high_offset as i64) as u16;
                let value = offset_to_value(offset, self.track_width, self.domain_min, self.domain_max);
                self.low_offset = offset;
                self.low_value = value.min(self.high_value);
            }
            Handle::High => {
                let offset =
                    proposed.clamp(self.low_offset as i64, self.track_width as i64) as u16;
                let value = offset_to_value(offset, self.track_width, self.domain_min, self.domain_max);
                self.high_offset = offset;
                self.high_value = value.max(self.low_value);
            }
        }

        true
    }

    /// Stop dragging; values stay where the drag left them
    pub fn end_drag(&mut self) {
        self.anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn dragging_handle(&self) -> Option<Handle> {
        self.anchor.map(|anchor| anchor.handle)
    }

    /// Move a handle by `delta` cells, with the same clamping as a drag
    ///
    /// Returns `true` if the handle's value changed.
    pub fn nudge(&mut self, handle: Handle, delta: i32) -> bool {
        let before = self.value(handle);
        let start = self.offset(handle) as i32;

        self.begin_drag(handle, start);
        self.continue_drag(handle, start + delta);
        self.end_drag();

        self.value(handle) != before
    }

    /// Change the track width, keeping the selected values
    pub fn resize(&mut self, track_width: u16) {
        self.track_width = track_width;
        self.anchor = None;

        if self.is_collapsed() {
            self.low_offset = 0;
            self.high_offset = 0;
            return;
        }

        self.low_offset =
            value_to_offset(self.low_value, track_width, self.domain_min, self.domain_max);
        self.high_offset =
            value_to_offset(self.high_value, track_width, self.domain_min, self.domain_max)
                .max(self.low_offset);
    }

    /// Put both handles back at the domain extremes
    pub fn reset(&mut self) {
        self.initialize(self.domain_min, self.domain_max, self.track_width);
    }

    pub fn offset(&self, handle: Handle) -> u16 {
        match handle {
            Handle::Low => self.low_offset,
            Handle::High => self.high_offset,
        }
    }

    pub fn value(&self, handle: Handle) -> i64 {
        match handle {
            Handle::Low => self.low_value,
            Handle::High => self.high_value,
        }
    }

    /// Currently selected closed interval
    pub fn range(&self) -> ValueRange {
        ValueRange::new(self.low_value, self.high_value)
    }

    pub fn domain_min(&self) -> i64 {
        self.domain_min
    }

    pub fn domain_max(&self) -> i64 {
        self.domain_max
    }

    pub fn low_value(&self) -> i64 {
        self.low_value
    }

    pub fn high_value(&self) -> i64 {
        self.high_value
    }

    pub fn low_offset(&self) -> u16 {
        self.low_offset
    }

    pub fn high_offset(&self) -> u16 {
        self.high_offset
    }

    pub fn track_width(&self) -> u16 {
        self.track_width
    }

    /// Whether the selection spans the whole domain
    pub fn is_full_range(&self) -> bool {
        self.low_value == self.domain_min && self.high_value == self.domain_max
    }
}
