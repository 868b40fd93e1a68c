use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use movietui::model::ui::Focus;
use movietui::model::{DragSession, FilterModel};

fn focus_name(focus: Focus) -> &'static str {
    match focus {
        Focus::Director => "Director",
        Focus::Country => "Country",
        Focus::YearLow => "Year (low)",
        Focus::YearHigh => "Year (high)",
        Focus::GrossLow => "Gross (low)",
        Focus::GrossHigh => "Gross (high)",
        Focus::Table => "Table",
    }
}

/// Build the plain status text; segments are separated by " | "
pub fn build_status_line(
    focus: Focus,
    filters: &FilterModel,
    selected_row: Option<usize>,
    row_count: usize,
) -> String {
    let mut metrics = vec![format!("Focus: {}", focus_name(focus))];

    metrics.push(format!("Sort: {}", filters.sort.as_str()));

    let filtering = if filters.is_filtering() { "On" } else { "Off" };
    metrics.push(format!("Filters: {}", filtering));

    if let DragSession::Dragging { axis, handle } = filters.drag {
        metrics.push(format!("Dragging: {} {:?}", axis.label(), handle));
    }

    if let Some(row) = selected_row {
        if row_count > 0 {
            metrics.push(format!("Row: {}/{}", row + 1, row_count));
        }
    }

    metrics.join(" | ")
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    focus: Focus,
    filters: &FilterModel,
    selected_row: Option<usize>,
    row_count: usize,
) {
    let status_line = build_status_line(focus, filters, selected_row, row_count);

    // Color the labels (before colons)
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        if let Some(colon_pos) = part.find(':') {
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            spans.push(Span::styled(label, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(value));
        } else {
            spans.push(Span::raw(part));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use movietui::logic::range::Handle;
    use movietui::model::{Axis, SortState};
    use movietui::SortKey;

    #[test]
    fn test_status_line_idle() {
        let filters = FilterModel::new();
        let line = build_status_line(Focus::Table, &filters, None, 0);
        assert_eq!(line, "Focus: Table | Sort: None | Filters: Off");
    }

    #[test]
    fn test_status_line_with_sort_drag_and_row() {
        let mut filters = FilterModel::new();
        filters.sort = SortState::by(SortKey::YEAR_DESC);
        filters.director = Some("Nolan".to_string());
        filters.drag = DragSession::Dragging {
            axis: Axis::Gross,
            handle: Handle::High,
        };

        let line = build_status_line(Focus::GrossHigh, &filters, Some(2), 10);
        assert!(line.contains("Sort: Year ↓"));
        assert!(line.contains("Filters: On"));
        assert!(line.contains("Dragging: Gross High"));
        assert!(line.ends_with("Row: 3/10"));
    }
}
