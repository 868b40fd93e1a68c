//! Layout calculation logic
//!
//! Pure functions for slider track geometry and button placement, in
//! terminal cells.

use crate::logic::range::Handle;
use unicode_width::UnicodeWidthStr;

/// Track width (in offsets) for a track drawn across `track_cells` cells
///
/// A handle at offset `n` is drawn in cell `n`, so a track of `c` cells has
/// offsets `0..=c-1`.
///
/// # Examples
/// ```
/// use movietui::logic::layout::track_width_for_cells;
///
/// assert_eq!(track_width_for_cells(40), 39);
/// assert_eq!(track_width_for_cells(1), 0);
/// assert_eq!(track_width_for_cells(0), 0);
/// ```
pub fn track_width_for_cells(track_cells: u16) -> u16 {
    track_cells.saturating_sub(1)
}

/// Find the handle drawn at `column`, if any
///
/// When both handles share a cell, the one that can still move is picked:
/// the low handle if they sit at the far right end, otherwise the high one.
/// Mid-track both can move, so that pick is only provisional; a mouse drag
/// started with [`RangeSelector::grab`] follows the direction of movement.
///
/// [`RangeSelector::grab`]: crate::logic::range::RangeSelector::grab
///
/// # Arguments
/// * `column` - Pointer column on screen
/// * `track_x` - Screen column of offset 0
/// * `low_offset` / `high_offset` - Current handle offsets
/// * `track_width` - Largest offset on the track
pub fn hit_handle(
    column: u16,
    track_x: u16,
    low_offset: u16,
    high_offset: u16,
    track_width: u16,
) -> Option<Handle> {
    if column < track_x {
        return None;
    }
    let rel = column - track_x;
    if rel > track_width {
        return None;
    }

    if rel == low_offset && rel == high_offset {
        if high_offset == track_width && track_width > 0 {
            Some(Handle::Low)
        } else {
            Some(Handle::High)
        }
    } else if rel == low_offset {
        Some(Handle::Low)
    } else if rel == high_offset {
        Some(Handle::High)
    } else {
        None
    }
}

/// Lay buttons out left to right, returning `(x, width)` for each label
///
/// Each button is drawn as `[ label ]` followed by `gap` blank cells.
///
/// # Examples
/// ```
/// use movietui::logic::layout::button_spans;
///
/// let spans = button_spans(&["Apply", "Reset"], 2, 1);
/// assert_eq!(spans, vec![(2, 9), (12, 9)]);
/// ```
pub fn button_spans(labels: &[&str], start_x: u16, gap: u16) -> Vec<(u16, u16)> {
    let mut x = start_x;
    labels
        .iter()
        .map(|label| {
            let width = (label.width() + 4) as u16;
            let span = (x, width);
            x = x.saturating_add(width).saturating_add(gap);
            span
        })
        .collect()
}

/// Index of the button span containing `column`
pub fn button_at(spans: &[(u16, u16)], column: u16) -> Option<usize> {
    spans
        .iter()
        .position(|&(x, width)| column >= x && column < x.saturating_add(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_handle_distinct_cells() {
        assert_eq!(hit_handle(10, 10, 0, 20, 20), Some(Handle::Low));
        assert_eq!(hit_handle(30, 10, 0, 20, 20), Some(Handle::High));
        assert_eq!(hit_handle(15, 10, 0, 20, 20), None);
    }

    #[test]
    fn test_hit_handle_outside_track() {
        assert_eq!(hit_handle(9, 10, 0, 20, 20), None);
        assert_eq!(hit_handle(31, 10, 0, 20, 20), None);
    }

    #[test]
    fn test_hit_handle_overlapping_picks_movable() {
        // Both at the right end: only low can move
        assert_eq!(hit_handle(30, 10, 20, 20, 20), Some(Handle::Low));
        // Both at the left end: only high can move
        assert_eq!(hit_handle(10, 10, 0, 0, 20), Some(Handle::High));
        // Touching in the middle: high until the drag direction decides
        assert_eq!(hit_handle(15, 10, 5, 5, 20), Some(Handle::High));
    }

    #[test]
    fn test_hit_handle_collapsed_track() {
        assert_eq!(hit_handle(10, 10, 0, 0, 0), Some(Handle::High));
    }

    #[test]
    fn test_button_at() {
        let spans = button_spans(&["Gross ↑", "Gross ↓"], 0, 1);
        assert_eq!(spans[0], (0, 11));
        assert_eq!(button_at(&spans, 0), Some(0));
        assert_eq!(button_at(&spans, 10), Some(0));
        assert_eq!(button_at(&spans, 11), None);
        assert_eq!(button_at(&spans, 12), Some(1));
    }
}
