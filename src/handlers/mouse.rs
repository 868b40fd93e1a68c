//! Mouse Input Handler
//!
//! Left press starts a handle drag or clicks a control. While a drag is
//! active, every `Drag` event moves the handle no matter where the pointer
//! is; release ends the drag.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use movietui::model::ui::Focus;

use crate::ui::dialogs::dropdown_row_at;
use crate::ui::layout::HitTarget;
use crate::{log_debug, App};

/// Rows the wheel scrolls the table by
const WHEEL_STEP: i32 = 3;

/// Handle mouse input
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => app.drag_to(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => app.end_drag(),
        MouseEventKind::ScrollDown if app.ui.has_modal() => app.move_dropdown_selection(1),
        MouseEventKind::ScrollUp if app.ui.has_modal() => app.move_dropdown_selection(-1),
        MouseEventKind::ScrollDown => app.scroll_rows(WHEEL_STEP),
        MouseEventKind::ScrollUp => app.scroll_rows(-WHEEL_STEP),
        _ => {}
    }
}

fn handle_click(app: &mut App, column: u16, row: u16) {
    // An open dropdown is modal: click an entry or click away to close
    if let Some(dropdown) = app.ui.dropdown.clone() {
        let rows = app.controller.model().dataset.options(dropdown.field).len() + 1;
        let clicked = app
            .dropdown_popup
            .and_then(|(area, offset)| dropdown_row_at(area, offset, rows, column, row));
        match clicked {
            Some(idx) => app.confirm_dropdown(Some(idx)),
            None => app.close_dropdown(),
        }
        return;
    }

    let Some(layout) = app.layout.as_ref() else {
        return;
    };
    let target = layout.hit_test(column, row, &app.controller.model().filters);
    log_debug(&format!("Click at ({}, {}) -> {:?}", column, row, target));

    match target {
        Some(HitTarget::Handle(axis, handle)) => app.start_drag(axis, handle, column),
        Some(HitTarget::Dropdown(field)) => app.open_dropdown(field),
        Some(HitTarget::Sort(key)) => app.select_sort(key),
        Some(HitTarget::Apply) => app.apply_filters(),
        Some(HitTarget::Reset) => app.reset_filters(),
        Some(HitTarget::Table) => {
            app.ui.focus = Focus::Table;
            select_clicked_row(app, row);
        }
        None => {}
    }
}

/// Highlight the table row under the pointer (header and border excluded)
fn select_clicked_row(app: &mut App, row: u16) {
    let Some(layout) = app.layout.as_ref() else {
        return;
    };
    // border + header
    let first_row = layout.table_area.y.saturating_add(2);
    if row < first_row {
        return;
    }
    let idx = app.table_offset + (row - first_row) as usize;
    if idx < app.controller.view().rows.len() {
        app.ui.table_selection = Some(idx);
    }
}
