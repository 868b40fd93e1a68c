//! Range slider orchestration: mouse drags and keyboard nudges

use movietui::logic::range::Handle;
use movietui::logic::ui::focus_for_handle;
use movietui::model::{Axis, DragSession};

use crate::{log_debug, App};

impl App {
    /// Mouse pressed on a handle
    pub(crate) fn start_drag(&mut self, axis: Axis, handle: Handle, column: u16) {
        if !self.controller.is_loaded() {
            return;
        }
        self.controller.pointer_down(axis, handle, column as i32);
        self.ui.focus = focus_for_handle(axis, handle);
        log_debug(&format!("Drag start: {} {:?} at column {}", axis.label(), handle, column));
    }

    /// Mouse moved with the button held, anywhere on screen
    pub(crate) fn drag_to(&mut self, column: u16) {
        if self.controller.pointer_move(column as i32) {
            // Touching handles settle on one only once the pointer moves
            if let DragSession::Dragging { axis, handle } = self.controller.drag_session() {
                self.ui.focus = focus_for_handle(axis, handle);
            }
            self.clamp_table_selection();
        }
    }

    pub(crate) fn end_drag(&mut self) {
        if self.controller.drag_session().is_dragging() {
            let state = self.controller.filter_state();
            log_debug(&format!(
                "Drag end: year {:?}, gross {:?}",
                state.year_range, state.gross_range
            ));
        }
        self.controller.pointer_up();
    }

    /// Move a focused handle from the keyboard
    pub(crate) fn nudge_handle(&mut self, axis: Axis, handle: Handle, delta: i32) {
        if self.controller.nudge(axis, handle, delta) {
            self.clamp_table_selection();
        }
    }
}
