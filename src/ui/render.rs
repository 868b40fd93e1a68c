use crate::App;
use ratatui::{
    widgets::{ListState, TableState},
    Frame,
};

use movietui::logic::options::ListField;
use movietui::logic::ui::focused_handle;
use movietui::model::ui::Focus;
use movietui::model::DragSession;

use super::{
    buttons, dialogs, filter_panel, layout,
    legend::{self, LegendContext},
    movie_table, status_bar, title_bar, toast,
};

/// Main render function - orchestrates all UI rendering
///
/// Also keeps the controller's track width in step with the terminal and
/// stores the layout for mouse hit-testing.
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let drag = app.controller.drag_session();
    let legend_ctx = LegendContext {
        vim_mode: app.ui.vim_mode,
        focus: app.ui.focus,
        dropdown_open: app.ui.has_modal(),
        dragging: drag.is_dragging(),
    };
    let legend_height = legend::calculate_legend_height(size.width, legend_ctx);
    let layout_info = layout::calculate_layout(size, legend_height);

    app.controller.resize_tracks(layout_info.track_width);

    let model = app.controller.model();
    let rows = &app.controller.view().rows;

    title_bar::render_title_bar(
        f,
        layout_info.title_area,
        &app.source_label(),
        &model.dataset.load_state,
        rows.len(),
        model.dataset.movies.len(),
    );

    // A dragged handle wins over a keyboard-focused one
    let highlight = match drag {
        DragSession::Dragging { axis, handle } => Some((axis, handle)),
        DragSession::Idle => focused_handle(app.ui.focus),
    };
    let field_focus = match app.ui.focus {
        Focus::Director => Some(ListField::Director),
        Focus::Country => Some(ListField::Country),
        _ => None,
    };
    filter_panel::render_filter_panel(f, &layout_info, &model.filters, highlight, field_focus);

    buttons::render_buttons(
        f,
        layout_info.buttons_area,
        &layout_info.button_spans,
        model.filters.sort,
    );

    // Create temporary TableState for rendering
    let mut table_state = TableState::default()
        .with_offset(app.table_offset)
        .with_selected(app.ui.table_selection);
    movie_table::render_movie_table(
        f,
        layout_info.table_area,
        rows,
        &model.dataset.load_state,
        &mut table_state,
        app.ui.focus == Focus::Table,
    );
    let table_offset = table_state.offset();

    legend::render_legend(f, layout_info.legend_area, legend_ctx);

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        app.ui.focus,
        &model.filters,
        app.ui.table_selection,
        rows.len(),
    );

    let popup = app.ui.dropdown.as_ref().map(|dropdown| {
        let previous_offset = app.dropdown_popup.map(|(_, offset)| offset).unwrap_or(0);
        let mut list_state = ListState::default()
            .with_offset(previous_offset)
            .with_selected(dropdown.selected_index);
        dialogs::render_dropdown(
            f,
            layout_info.dropdown_anchor(dropdown.field),
            dropdown.field,
            model.dataset.options(dropdown.field),
            &mut list_state,
        )
    });

    if let Some((message, _timestamp)) = &app.ui.toast_message {
        toast::render_toast(f, size, message);
    }

    app.table_offset = table_offset;
    app.dropdown_popup = popup;
    app.layout = Some(layout_info);
}
