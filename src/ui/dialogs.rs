use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use movietui::logic::options::ListField;

use super::layout::dropdown_area;

/// Draw the director/country dropdown under its field
///
/// Row 0 is "All". Returns the popup area and the list's scroll offset so
/// mouse clicks can be mapped back to rows.
pub fn render_dropdown(
    f: &mut Frame,
    anchor: Rect,
    field: ListField,
    options: &[String],
    state: &mut ListState,
) -> (Rect, usize) {
    let area = dropdown_area(anchor, options.len() + 1, f.area());

    let items: Vec<ListItem> = std::iter::once("All")
        .chain(options.iter().map(|o| o.as_str()))
        .map(|option| {
            ListItem::new(Span::raw(option.to_string())).style(Style::default().fg(Color::White))
        })
        .collect();

    let menu = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(field.label())
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().bg(Color::Black))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    f.render_widget(Clear, area);
    f.render_stateful_widget(menu, area, state);

    (area, state.offset())
}

/// Map a click inside the popup to a dropdown row
pub fn dropdown_row_at(area: Rect, offset: usize, row_count: usize, column: u16, row: u16) -> Option<usize> {
    let inside = column > area.x
        && column < area.x.saturating_add(area.width).saturating_sub(1)
        && row > area.y
        && row < area.y.saturating_add(area.height).saturating_sub(1);
    if !inside {
        return None;
    }
    let idx = offset + (row - area.y - 1) as usize;
    (idx < row_count).then_some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropdown_row_at() {
        let area = Rect::new(10, 5, 24, 6);
        assert_eq!(dropdown_row_at(area, 0, 10, 12, 6), Some(0));
        assert_eq!(dropdown_row_at(area, 3, 10, 12, 8), Some(5));
        // borders
        assert_eq!(dropdown_row_at(area, 0, 10, 12, 5), None);
        assert_eq!(dropdown_row_at(area, 0, 10, 10, 6), None);
        // past the last option
        assert_eq!(dropdown_row_at(area, 0, 2, 12, 8), None);
    }
}
