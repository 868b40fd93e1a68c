// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout and mouse hit-testing
// - render: Main orchestration function that coordinates all rendering
// - title_bar: Renders top bar (dataset source, load state, row counts)
// - filter_panel: Renders director/country fields and the two range sliders
// - buttons: Renders sort buttons plus Apply/Reset
// - movie_table: Renders the filtered, sorted movie table
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar (focus, sort, filters, drag)
// - dialogs: Renders the director/country dropdown popup
// - toast: Renders toast notifications (brief pop-up messages)

pub mod buttons;
pub mod dialogs;
pub mod filter_panel;
pub mod layout;
pub mod legend;
pub mod movie_table;
pub mod render;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
