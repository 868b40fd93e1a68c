use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use movietui::model::SortState;

use super::layout::Button;

/// Build the button row spans, padding each label into its `(x, width)` slot
pub fn build_button_spans(
    spans: &[(u16, u16)],
    start_x: u16,
    sort: SortState,
) -> Vec<Span<'static>> {
    let mut line = Vec::new();
    let mut cursor = start_x;

    for (button, &(x, _width)) in Button::ROW.iter().zip(spans) {
        if x > cursor {
            line.push(Span::raw(" ".repeat((x - cursor) as usize)));
        }

        let style = match button {
            Button::Sort(key) if sort.is_active(*key) => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Button::Sort(_) => Style::default().fg(Color::Cyan),
            Button::Apply => Style::default().fg(Color::Green),
            Button::Reset => Style::default().fg(Color::Red),
        };

        let text = format!("[ {} ]", button.label());
        cursor = x.saturating_add(unicode_width::UnicodeWidthStr::width(text.as_str()) as u16);
        line.push(Span::styled(text, style));
    }

    line
}

/// Render sort buttons plus Apply/Reset; the active sort button is filled
pub fn render_buttons(f: &mut Frame, area: Rect, spans: &[(u16, u16)], sort: SortState) {
    let start_x = area.x.saturating_add(1);
    let line = Line::from(build_button_spans(spans, start_x, sort));

    let widget = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title("Sort / Actions"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(widget, area);
}
