//! Dataset load completion

use movietui::logic::errors::describe_load_error;

use crate::{log_debug, services::LoadResult, App};

impl App {
    /// Hand the loaded movies to the controller, or record the failure
    ///
    /// A failed load leaves every control inert; the table shows the message.
    pub(crate) fn handle_load_result(&mut self, result: LoadResult) {
        match result {
            Ok(movies) => {
                let count = movies.len();
                let track_width = self.controller.track_width();
                self.controller.load(movies, track_width);

                if let Some(key) = self.initial_sort {
                    self.controller.select_sort(key);
                }

                self.ui.table_selection = if count > 0 { Some(0) } else { None };
                log_debug(&format!(
                    "Dataset ready: {} movies, track width {}",
                    count, track_width
                ));
            }
            Err(e) => {
                log_debug(&format!("Dataset load failed: {:#}", e));
                let message = describe_load_error(&e);
                self.ui.show_toast(format!("Error: {}", message));
                self.controller.load_failed(message);
            }
        }
    }
}
