// Display models derived from service responses.
// Pure data transformations, independent of the UI toolkit.

pub mod forecast_view;

// Re-export key types for convenience
pub use forecast_view::{ForecastView, Headline};
