use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use movietui::model::ui::Focus;

/// What the legend needs to know to pick its hotkeys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendContext {
    pub vim_mode: bool,
    pub focus: Focus,
    pub dropdown_open: bool,
    pub dragging: bool,
}

fn key(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(ctx: LegendContext) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if ctx.dragging {
        hotkey_spans.extend(vec![
            Span::styled("Drag", Style::default().fg(Color::Yellow)),
            Span::raw(":Move handle  "),
            Span::styled("Release", Style::default().fg(Color::Yellow)),
            Span::raw(":Finish"),
        ]);
        return hotkey_spans;
    }

    if ctx.dropdown_open {
        let nav = if ctx.vim_mode { "j/k" } else { "↑/↓" };
        hotkey_spans.extend(vec![
            key(nav),
            Span::raw(":Choose  "),
            key("Enter"),
            Span::raw(":Select  "),
            key("Esc"),
            Span::raw(":Cancel"),
        ]);
        return hotkey_spans;
    }

    hotkey_spans.extend(vec![key("Tab"), Span::raw(":Focus  ")]);

    match ctx.focus {
        Focus::Director | Focus::Country => {
            hotkey_spans.extend(vec![key("Enter"), Span::raw(":Open list  ")]);
        }
        Focus::YearLow | Focus::YearHigh | Focus::GrossLow | Focus::GrossHigh => {
            let nudge = if ctx.vim_mode { "h/l" } else { "←/→" };
            hotkey_spans.extend(vec![
                key(nudge),
                Span::raw(":Move handle  "),
                key("Shift"),
                Span::raw(":×5  "),
            ]);
        }
        Focus::Table => {
            let nav = if ctx.vim_mode { "j/k" } else { "↑/↓" };
            hotkey_spans.extend(vec![key(nav), Span::raw(":Scroll  "), key("PgUp/PgDn"), Span::raw(":Page  ")]);
        }
    }

    hotkey_spans.extend(vec![
        key("1-4"),
        Span::raw(":Sort  "),
        key("a"),
        Span::raw(":Apply  "),
        key("r"),
        Span::raw(":Reset  "),
        key("R"),
        Span::raw(":Reset all  "),
        key("q"),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(ctx: LegendContext) -> Paragraph<'static> {
    Paragraph::new(vec![Line::from(build_hotkey_spans(ctx))])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend (changes with focus, popups and drags)
pub fn render_legend(f: &mut Frame, area: Rect, ctx: LegendContext) {
    f.render_widget(build_legend_paragraph(ctx), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, ctx: LegendContext) -> u16 {
    // line_count() doesn't account for borders when a block is attached
    let paragraph_for_counting = Paragraph::new(vec![Line::from(build_hotkey_spans(ctx))])
        .wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_to_text(spans: &[Span]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn ctx(focus: Focus) -> LegendContext {
        LegendContext {
            vim_mode: false,
            focus,
            dropdown_open: false,
            dragging: false,
        }
    }

    #[test]
    fn test_legend_slider_focus_shows_nudge_keys() {
        let text = spans_to_text(&build_hotkey_spans(ctx(Focus::GrossHigh)));
        assert!(text.contains("←/→:Move handle"), "got: {}", text);
        assert!(text.contains("a:Apply"));

        let vim = LegendContext {
            vim_mode: true,
            ..ctx(Focus::YearLow)
        };
        let text = spans_to_text(&build_hotkey_spans(vim));
        assert!(text.contains("h/l:Move handle"), "got: {}", text);
    }

    #[test]
    fn test_legend_dropdown_replaces_global_keys() {
        let open = LegendContext {
            dropdown_open: true,
            ..ctx(Focus::Director)
        };
        let text = spans_to_text(&build_hotkey_spans(open));
        assert!(text.contains("Esc:Cancel"));
        assert!(!text.contains("q:Quit"), "got: {}", text);
    }

    #[test]
    fn test_legend_while_dragging() {
        let dragging = LegendContext {
            dragging: true,
            ..ctx(Focus::Table)
        };
        let text = spans_to_text(&build_hotkey_spans(dragging));
        assert!(text.starts_with("Drag:Move handle"));
    }

    #[test]
    fn test_legend_height_grows_on_narrow_terminal() {
        let wide = calculate_legend_height(400, ctx(Focus::Table));
        let narrow = calculate_legend_height(30, ctx(Focus::Table));
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
