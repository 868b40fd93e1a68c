//! External Services
//!
//! This module contains services that interact with external systems:
//! - loader: One-shot background dataset load

pub mod loader;

pub use loader::{spawn_dataset_load, LoadResult};
