//! UI state transition logic
//!
//! Pure functions for focus cycling and key-to-action mapping.

use crate::logic::range::Handle;
use crate::model::types::Axis;
use crate::model::ui::Focus;
use crate::SortKey;

/// Order in which Tab moves through the controls
pub const FOCUS_ORDER: [Focus; 7] = [
    Focus::Director,
    Focus::Country,
    Focus::YearLow,
    Focus::YearHigh,
    Focus::GrossLow,
    Focus::GrossHigh,
    Focus::Table,
];

/// Cycle to the next focusable control, wrapping at the end
///
/// # Examples
/// ```
/// use movietui::logic::ui::next_focus;
/// use movietui::model::ui::Focus;
///
/// assert_eq!(next_focus(Focus::Director), Focus::Country);
/// assert_eq!(next_focus(Focus::Table), Focus::Director);
/// ```
pub fn next_focus(current: Focus) -> Focus {
    let idx = FOCUS_ORDER.iter().position(|f| *f == current).unwrap_or(0);
    FOCUS_ORDER[(idx + 1) % FOCUS_ORDER.len()]
}

/// Cycle to the previous focusable control, wrapping at the start
pub fn prev_focus(current: Focus) -> Focus {
    let idx = FOCUS_ORDER.iter().position(|f| *f == current).unwrap_or(0);
    FOCUS_ORDER[(idx + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()]
}

/// Slider handle a focus position controls, if any
pub fn focused_handle(focus: Focus) -> Option<(Axis, Handle)> {
    match focus {
        Focus::YearLow => Some((Axis::Year, Handle::Low)),
        Focus::YearHigh => Some((Axis::Year, Handle::High)),
        Focus::GrossLow => Some((Axis::Gross, Handle::Low)),
        Focus::GrossHigh => Some((Axis::Gross, Handle::High)),
        Focus::Director | Focus::Country | Focus::Table => None,
    }
}

/// Focus position for a slider handle (used when a drag starts with the mouse)
pub fn focus_for_handle(axis: Axis, handle: Handle) -> Focus {
    match (axis, handle) {
        (Axis::Year, Handle::Low) => Focus::YearLow,
        (Axis::Year, Handle::High) => Focus::YearHigh,
        (Axis::Gross, Handle::Low) => Focus::GrossLow,
        (Axis::Gross, Handle::High) => Focus::GrossHigh,
    }
}

/// Sort button bound to a digit key (`1`-`4`, in on-screen order)
///
/// # Examples
/// ```
/// use movietui::SortKey;
/// use movietui::logic::ui::sort_key_for_digit;
///
/// assert_eq!(sort_key_for_digit('1'), Some(SortKey::GROSS_ASC));
/// assert_eq!(sort_key_for_digit('4'), Some(SortKey::YEAR_DESC));
/// assert_eq!(sort_key_for_digit('5'), None);
/// ```
pub fn sort_key_for_digit(c: char) -> Option<SortKey> {
    let idx = c.to_digit(10)? as usize;
    if idx == 0 {
        return None;
    }
    SortKey::BUTTONS.get(idx - 1).copied()
}

/// Check whether a toast has been visible long enough to dismiss
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= 2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_round_trip() {
        let mut focus = Focus::Director;
        for _ in 0..FOCUS_ORDER.len() {
            focus = next_focus(focus);
        }
        assert_eq!(focus, Focus::Director);
        assert_eq!(prev_focus(Focus::Director), Focus::Table);
        assert_eq!(prev_focus(Focus::YearLow), Focus::Country);
    }

    #[test]
    fn test_focused_handle() {
        assert_eq!(focused_handle(Focus::GrossHigh), Some((Axis::Gross, Handle::High)));
        assert_eq!(focused_handle(Focus::Table), None);
        for axis in Axis::ALL {
            for handle in [Handle::Low, Handle::High] {
                assert_eq!(focused_handle(focus_for_handle(axis, handle)), Some((axis, handle)));
            }
        }
    }

    #[test]
    fn test_sort_key_for_digit_zero() {
        assert_eq!(sort_key_for_digit('0'), None);
        assert_eq!(sort_key_for_digit('x'), None);
    }

    #[test]
    fn test_should_dismiss_toast() {
        assert!(!should_dismiss_toast(0));
        assert!(!should_dismiss_toast(1999));
        assert!(should_dismiss_toast(2000));
    }
}
