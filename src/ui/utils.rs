use eframe::egui::{Color32, Context, Frame, Margin, RichText, Ui, Visuals};

use crate::config::plot::PLOT_CONFIG;
use crate::ui::config::UI_CONFIG;

/// Dark theme with the chart's blue as the accent, so selections match the actual-price line.
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.extreme_bg_color = UI_CONFIG.colors.central_panel;
    visuals.window_corner_radius = UI_CONFIG.card_corner_radius.into();

    visuals.selection.bg_fill = PLOT_CONFIG.actual_color.linear_multiply(0.6);
    visuals.hyperlink_color = PLOT_CONFIG.actual_color;
    visuals.error_fg_color = UI_CONFIG.colors.error_text;
    visuals.warn_fg_color = UI_CONFIG.colors.warning;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Rounded, filled frame shared by the headline, error and stat cards.
pub fn card_frame(fill: Color32, margin: i8) -> Frame {
    Frame::new()
        .fill(fill)
        .corner_radius(UI_CONFIG.card_corner_radius)
        .inner_margin(Margin::same(margin))
}

/// Side panel section title, e.g. "DATA FILE"
pub fn section_heading(ui: &mut Ui, text: &str) {
    ui.add_space(UI_CONFIG.section_spacing);
    ui.label(
        RichText::new(text.to_uppercase())
            .strong()
            .monospace()
            .color(UI_CONFIG.colors.heading),
    );
    ui.add_space(UI_CONFIG.section_spacing / 2.0);
}

pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(UI_CONFIG.section_spacing);
    ui.separator();
    ui.add_space(UI_CONFIG.section_spacing);
}

/// Prices are always shown in dollars with two decimals, e.g. "$101.00"
pub fn format_price(price: f64) -> String {
    if price < 0.0 {
        format!("-${:.2}", price.abs())
    } else {
        format!("${:.2}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_use_two_decimals() {
        assert_eq!(format_price(105.0), "$105.00");
        assert_eq!(format_price(3.14159), "$3.14");
        assert_eq!(format_price(-2.5), "-$2.50");
    }
}
