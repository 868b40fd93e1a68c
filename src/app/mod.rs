//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - The controller (filter/sort/drag state, in the library)
//! - UI state (focus, dropdown popup, toasts)
//! - Logging
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

pub(crate) mod dataset;
pub(crate) mod filters;
pub(crate) mod navigation;
pub(crate) mod sliders;
pub(crate) mod sorting;
