//! Filter Panel UI
//!
//! Renders the director/country dropdown fields and the two range sliders,
//! each slider with its low and high value displays.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use movietui::logic::formatting::format_axis_value;
use movietui::logic::options::ListField;
use movietui::logic::range::{Handle, RangeSelector};
use movietui::model::{Axis, FilterModel};

use super::layout::{LayoutInfo, SliderArea, LABEL_WIDTH};

const HANDLE: &str = "●";
const SELECTED: &str = "━";
const UNSELECTED: &str = "─";

/// Build the track line for a slider
///
/// One span per cell: handles at their offsets, the selected span between
/// them drawn heavier than the rest of the track.
pub fn build_track_spans(
    track_cells: u16,
    low_offset: u16,
    high_offset: u16,
    highlight: Option<Handle>,
) -> Vec<Span<'static>> {
    let handle_style = |handle: Handle| {
        if highlight == Some(handle) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        }
    };

    (0..track_cells)
        .map(|cell| {
            if cell == high_offset {
                Span::styled(HANDLE, handle_style(Handle::High))
            } else if cell == low_offset {
                Span::styled(HANDLE, handle_style(Handle::Low))
            } else if cell > low_offset && cell < high_offset {
                Span::styled(SELECTED, Style::default().fg(Color::Cyan))
            } else {
                Span::styled(UNSELECTED, Style::default().fg(Color::DarkGray))
            }
        })
        .collect()
}

/// Render the whole filter panel
///
/// `highlight` is the slider handle that has focus or is being dragged;
/// `field_focus` marks a focused dropdown field.
pub fn render_filter_panel(
    f: &mut Frame,
    layout: &LayoutInfo,
    filters: &FilterModel,
    highlight: Option<(Axis, Handle)>,
    field_focus: Option<ListField>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Filters")
        .style(Style::default().fg(Color::Gray));
    f.render_widget(block, layout.filter_area);

    render_field(
        f,
        layout.director_area,
        ListField::Director.label(),
        filters.director.as_deref(),
        field_focus == Some(ListField::Director),
    );
    render_field(
        f,
        layout.country_area,
        ListField::Country.label(),
        filters.country.as_deref(),
        field_focus == Some(ListField::Country),
    );

    for axis in Axis::ALL {
        let handle = highlight.and_then(|(a, h)| (a == axis).then_some(h));
        render_slider(f, layout.slider(axis), axis, filters.selector(axis), handle);
    }
}

fn render_field(f: &mut Frame, area: Rect, label: &str, value: Option<&str>, focused: bool) {
    let label_area = Rect {
        x: area.x.saturating_sub(LABEL_WIDTH),
        width: LABEL_WIDTH,
        ..area
    };
    f.render_widget(
        Paragraph::new(format!("{}:", label)).style(Style::default().fg(Color::White)),
        label_area,
    );

    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    };
    let text = format!(" {} ▾", value.unwrap_or("All"));
    f.render_widget(Paragraph::new(Span::styled(text, style)), area);
}

fn render_slider(
    f: &mut Frame,
    area: &SliderArea,
    axis: Axis,
    selector: &RangeSelector,
    highlight: Option<Handle>,
) {
    f.render_widget(
        Paragraph::new(format!("{}:", axis.label())).style(Style::default().fg(Color::White)),
        area.label,
    );

    let display_style = |handle: Handle| {
        if highlight == Some(handle) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };

    f.render_widget(
        Paragraph::new(Span::styled(
            format!("{} ", format_axis_value(axis, selector.low_value())),
            display_style(Handle::Low),
        ))
        .alignment(Alignment::Right),
        area.low_display,
    );

    let track = build_track_spans(
        area.track.width,
        selector.low_offset(),
        selector.high_offset(),
        highlight,
    );
    f.render_widget(Paragraph::new(Line::from(track)), area.track);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", format_axis_value(axis, selector.high_value())),
            display_style(Handle::High),
        )),
        area.high_display,
    );
}
