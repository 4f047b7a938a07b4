//! Configuration module for the forecast viewer.

pub mod api;

mod debug; // Private because of the public re-export. Forces files to use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod plot;

// Re-export commonly used items
pub use api::{API, ApiSettings};
pub use plot::PLOT_CONFIG;
