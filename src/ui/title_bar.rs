use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use movietui::model::LoadState;

/// Render the top bar: dataset source, load state and row counts
pub fn render_title_bar(
    f: &mut Frame,
    area: Rect,
    source: &str,
    load_state: &LoadState,
    shown: usize,
    total: usize,
) {
    let mut spans = vec![Span::styled(
        "🎬 Movies",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    match load_state {
        LoadState::Loading => {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("🟡 Loading {}...", source),
                Style::default().fg(Color::Yellow),
            ));
        }
        LoadState::Loaded => {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(source.to_string()));
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("{} of {} shown", shown, total),
                Style::default().fg(Color::Green),
            ));
        }
        LoadState::Failed { message } => {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("🔴 {}", message),
                Style::default().fg(Color::Red),
            ));
        }
    }

    let title = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Dataset"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(title, area);
}
