use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    /// Fill of the headline prediction card
    pub card: Color32,
    /// Bright text on the headline card
    pub card_text: Color32,
    pub error_fill: Color32,
    pub error_text: Color32,
    pub error_detail: Color32,
    pub warning: Color32,
    /// Expected change >= 0
    pub gain: Color32,
    /// Expected change < 0
    pub loss: Color32,
    pub stat_records: Color32,
    pub stat_horizon: Color32,
    pub stat_steps: Color32,
    pub status_service: Color32,
    pub status_model: Color32,
    pub status_timing: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
    /// Size of the predicted close price; secondary figures are scaled from it
    pub headline_font_size: f32,
    pub stat_font_size: f32,
    pub card_corner_radius: f32,
    /// Vertical gap around side panel sections
    pub section_spacing: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::from_rgb(147, 197, 253), // Sets every heading
        subsection_heading: Color32::from_rgb(165, 180, 252),
        central_panel: Color32::from_rgb(17, 24, 39),
        side_panel: Color32::from_rgb(25, 25, 25),
        card: Color32::from_rgb(30, 58, 138),
        card_text: Color32::WHITE,
        error_fill: Color32::from_rgb(69, 10, 10),
        error_text: Color32::from_rgb(255, 100, 100),
        error_detail: Color32::from_rgb(254, 202, 202),
        warning: Color32::from_rgb(255, 215, 0),
        gain: Color32::from_rgb(74, 222, 128),
        loss: Color32::from_rgb(248, 113, 113),
        stat_records: Color32::from_rgb(192, 132, 252),
        stat_horizon: Color32::from_rgb(96, 165, 250),
        stat_steps: Color32::from_rgb(52, 211, 153),
        status_service: Color32::from_rgb(100, 200, 255),
        status_model: Color32::from_rgb(180, 200, 255),
        status_timing: Color32::from_rgb(150, 255, 150),
    },
    side_panel_min_width: 260.0,
    headline_font_size: 40.0,
    stat_font_size: 24.0,
    card_corner_radius: 8.0,
    section_spacing: 10.0,
};
