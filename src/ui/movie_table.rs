use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use movietui::dataset::MovieRecord;
use movietui::logic::formatting::{format_thousands, join_list};
use movietui::model::LoadState;

const HEADERS: [&str; 5] = ["Title", "Worldwide Gross", "Year", "Director(s)", "Country(s)"];

/// Cell text for one movie, in column order
pub fn row_cells(movie: &MovieRecord) -> [String; 5] {
    [
        movie.title.clone(),
        format_thousands(movie.gross()),
        movie.release_year.to_string(),
        join_list(&movie.director),
        join_list(&movie.country),
    ]
}

/// Render the movie table, or a placeholder while loading / after a failure
pub fn render_movie_table(
    f: &mut Frame,
    area: Rect,
    rows: &[MovieRecord],
    load_state: &LoadState,
    state: &mut TableState,
    is_focused: bool,
) {
    let border_color = if is_focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Movies ({})", rows.len()))
        .border_style(Style::default().fg(border_color));

    let placeholder = match load_state {
        LoadState::Loading => Some(Span::styled("Loading movies...", Style::default().fg(Color::Yellow))),
        LoadState::Failed { message } => {
            Some(Span::styled(message.clone(), Style::default().fg(Color::Red)))
        }
        LoadState::Loaded if rows.is_empty() => Some(Span::styled(
            "No movies match the current filters",
            Style::default().fg(Color::DarkGray),
        )),
        LoadState::Loaded => None,
    };

    if let Some(text) = placeholder {
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let body = rows.iter().map(|movie| {
        let [title, gross, year, directors, countries] = row_cells(movie);
        Row::new(vec![
            Cell::from(title),
            Cell::from(Span::styled(gross, Style::default().fg(Color::Green))),
            Cell::from(year),
            Cell::from(directors),
            Cell::from(countries),
        ])
    });

    let widths = [
        Constraint::Percentage(32),
        Constraint::Length(18),
        Constraint::Length(6),
        Constraint::Percentage(22),
        Constraint::Percentage(22),
    ];

    let table = Table::new(body, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    f.render_stateful_widget(table, area, state);
}
