use ratatui::layout::{Constraint, Direction, Layout, Rect};

use movietui::logic::layout::{button_at, button_spans, hit_handle, track_width_for_cells};
use movietui::logic::options::ListField;
use movietui::logic::range::Handle;
use movietui::model::{Axis, FilterModel};
use movietui::SortKey;

/// Width of the label column in the filter panel ("Director", "Year", ...)
pub const LABEL_WIDTH: u16 = 10;
/// Width of each low/high value display next to a slider track
pub const DISPLAY_WIDTH: u16 = 16;

/// Something on screen the mouse can act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Dropdown(ListField),
    Handle(Axis, Handle),
    Sort(SortKey),
    Apply,
    Reset,
    Table,
}

/// Button row entries, in on-screen order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Sort(SortKey),
    Apply,
    Reset,
}

impl Button {
    pub const ROW: [Button; 6] = [
        Button::Sort(SortKey::GROSS_ASC),
        Button::Sort(SortKey::GROSS_DESC),
        Button::Sort(SortKey::YEAR_ASC),
        Button::Sort(SortKey::YEAR_DESC),
        Button::Apply,
        Button::Reset,
    ];

    pub fn label(&self) -> String {
        match self {
            Button::Sort(key) => key.label(),
            Button::Apply => "Apply".to_string(),
            Button::Reset => "Reset".to_string(),
        }
    }
}

/// Areas of one slider row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderArea {
    pub label: Rect,
    pub low_display: Rect,
    pub track: Rect,
    pub high_display: Rect,
}

/// Layout information for rendering and mouse hit-testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutInfo {
    /// Top title bar
    pub title_area: Rect,
    /// Whole filter panel (bordered)
    pub filter_area: Rect,
    /// Director dropdown field
    pub director_area: Rect,
    /// Country dropdown field
    pub country_area: Rect,
    pub year_slider: SliderArea,
    pub gross_slider: SliderArea,
    /// Button row (bordered)
    pub buttons_area: Rect,
    /// `(x, width)` of each entry in `Button::ROW`
    pub button_spans: Vec<(u16, u16)>,
    /// Row the buttons are drawn on
    pub button_row: u16,
    /// Movie table
    pub table_area: Rect,
    /// Hotkey legend
    pub legend_area: Rect,
    /// Bottom status bar
    pub status_area: Rect,
    /// Track width (largest handle offset) shared by both sliders
    pub track_width: u16,
}

impl LayoutInfo {
    pub fn slider(&self, axis: Axis) -> &SliderArea {
        match axis {
            Axis::Year => &self.year_slider,
            Axis::Gross => &self.gross_slider,
        }
    }

    pub fn dropdown_anchor(&self, field: ListField) -> Rect {
        match field {
            ListField::Director => self.director_area,
            ListField::Country => self.country_area,
        }
    }

    /// Find what sits under the mouse at `(column, row)`
    pub fn hit_test(&self, column: u16, row: u16, filters: &FilterModel) -> Option<HitTarget> {
        if contains(self.director_area, column, row) {
            return Some(HitTarget::Dropdown(ListField::Director));
        }
        if contains(self.country_area, column, row) {
            return Some(HitTarget::Dropdown(ListField::Country));
        }

        for axis in Axis::ALL {
            let track = self.slider(axis).track;
            if row != track.y || !contains(track, column, row) {
                continue;
            }
            let selector = filters.selector(axis);
            return hit_handle(
                column,
                track.x,
                selector.low_offset(),
                selector.high_offset(),
                selector.track_width(),
            )
            .map(|handle| HitTarget::Handle(axis, handle));
        }

        if row == self.button_row {
            return button_at(&self.button_spans, column).map(|idx| match Button::ROW[idx] {
                Button::Sort(key) => HitTarget::Sort(key),
                Button::Apply => HitTarget::Apply,
                Button::Reset => HitTarget::Reset,
            });
        }

        if contains(self.table_area, column, row) {
            return Some(HitTarget::Table);
        }

        None
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16) -> LayoutInfo {
    // title + filter panel (4 rows + borders) + buttons + table + legend + status
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(legend_height),
            Constraint::Length(3),
        ])
        .split(terminal_size);

    let filter_area = main_chunks[1];
    let filter_inner = inner(filter_area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 4])
        .split(filter_inner);

    let director_area = field_area(rows[0]);
    let country_area = field_area(rows[1]);
    let year_slider = slider_area(rows[2]);
    let gross_slider = slider_area(rows[3]);

    let buttons_area = main_chunks[2];
    let buttons_inner = inner(buttons_area);
    let labels: Vec<String> = Button::ROW.iter().map(|b| b.label()).collect();
    let label_refs: Vec<&str> = labels.iter().map(|s| s.as_str()).collect();
    let spans = button_spans(&label_refs, buttons_inner.x.saturating_add(1), 1);

    LayoutInfo {
        title_area: main_chunks[0],
        filter_area,
        director_area,
        country_area,
        year_slider,
        gross_slider,
        buttons_area,
        button_spans: spans,
        button_row: buttons_inner.y,
        table_area: main_chunks[3],
        legend_area: main_chunks[4],
        status_area: main_chunks[5],
        track_width: track_width_for_cells(year_slider.track.width),
    }
}

/// Popup area for an open dropdown, placed just under its field
pub fn dropdown_area(anchor: Rect, option_rows: usize, screen: Rect) -> Rect {
    let width = anchor.width.max(24).min(screen.width);
    let wanted = (option_rows as u16).saturating_add(2).min(16);
    let y = anchor.y.saturating_add(1);
    let available = screen.y.saturating_add(screen.height).saturating_sub(y);
    let x = anchor.x.min(screen.x.saturating_add(screen.width).saturating_sub(width));

    Rect {
        x,
        y,
        width,
        height: wanted.min(available),
    }
}

fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn field_area(row: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)])
        .split(row);
    chunks[1]
}

fn slider_area(row: Rect) -> SliderArea {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(LABEL_WIDTH),
            Constraint::Length(DISPLAY_WIDTH),
            Constraint::Min(1),
            Constraint::Length(DISPLAY_WIDTH),
        ])
        .split(row);

    SliderArea {
        label: chunks[0],
        low_display: chunks[1],
        track: chunks[2],
        high_display: chunks[3],
    }
}
