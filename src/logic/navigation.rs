//! Navigation selection logic
//!
//! Pure functions for moving a selection through dropdown options and table rows.

/// Calculate the next selection index with wrapping
///
/// Used by dropdown popups: moving past the last option wraps to the first.
///
/// # Examples
/// ```
/// use movietui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// # Examples
/// ```
/// use movietui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) => (i - 1).min(list_len - 1),
    })
}

/// Move a table selection by `delta` rows without wrapping
///
/// Used for arrow keys, page up/down and the mouse wheel over the table.
///
/// # Examples
/// ```
/// use movietui::logic::navigation::scroll_selection;
///
/// assert_eq!(scroll_selection(None, 1, 10), Some(0));
/// assert_eq!(scroll_selection(Some(3), 5, 10), Some(8));
/// assert_eq!(scroll_selection(Some(8), 5, 10), Some(9));
/// assert_eq!(scroll_selection(Some(2), -10, 10), Some(0));
/// assert_eq!(scroll_selection(Some(2), 1, 0), None);
/// ```
pub fn scroll_selection(current: Option<usize>, delta: i32, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    let start = match current {
        Some(i) => i.min(list_len - 1) as i64,
        None => return Some(0),
    };
    let target = (start + delta as i64).clamp(0, list_len as i64 - 1);
    Some(target as usize)
}

/// Keep a selection valid after the list it points into changed length
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1))
}
