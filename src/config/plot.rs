//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub actual_color: Color32,
    pub forecast_color: Color32,
    pub model_fit_color: Color32,
    /// Colour of the vertical marker at the last known price
    pub boundary_color: Color32,
    // Layer visibility defaults
    // `true` values appear by default (but can be toggled in the side panel)
    pub show_actual: bool,
    pub show_forecast: bool,
    pub show_model_fit: bool,
    pub show_boundary: bool,
    pub line_width: f32,
    /// Length of the dashes used for the forecast line
    pub forecast_dash_length: f32,
    pub point_radius: f32,
    /// Upper bound on the number of date labels on the x axis
    pub max_x_labels: usize,
    /// Minimum chart height in points
    pub min_height: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    actual_color: Color32::from_rgb(59, 130, 246), // Blue
    forecast_color: Color32::from_rgb(239, 68, 68), // Red
    model_fit_color: Color32::from_rgb(168, 85, 247), // Purple
    boundary_color: Color32::from_gray(120),
    show_actual: true,
    show_forecast: true,
    show_model_fit: false,
    show_boundary: true,
    line_width: 2.0,
    forecast_dash_length: 5.0,
    point_radius: 2.0,
    max_x_labels: 20,
    min_height: 360.0,
};
