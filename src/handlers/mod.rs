//! Event Handlers
//!
//! This module contains handlers for terminal input:
//! - keyboard: Focus, dropdowns, slider nudges, table scrolling, actions
//! - mouse: Clicks, handle drags and wheel scrolling
//!
//! Handlers take &mut App and dispatch to the `impl App` methods in src/app/.

pub mod keyboard;
pub mod mouse;

pub use keyboard::handle_key;
pub use mouse::handle_mouse;
