use eframe::egui::{Color32, RichText, Ui};

use crate::models::Headline;
use crate::ui::config::UI_CONFIG;
use crate::ui::utils::format_price;

/// Direction marker and colour for an expected price change.
pub fn change_style(is_gain: bool) -> (&'static str, Color32) {
    if is_gain {
        ("▲", UI_CONFIG.colors.gain)
    } else {
        ("▼", UI_CONFIG.colors.loss)
    }
}

/// Semantic widgets for the forecast screens, available directly on `egui::Ui`.
pub trait UiStyleExt {
    /// Small gray caption, e.g. the title line of a card
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Status-bar "Label: Value" pair; the value carries the colour.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    fn label_subheader(&mut self, text: impl Into<String>);

    fn label_error(&mut self, text: impl Into<String>);

    fn label_warning(&mut self, text: impl Into<String>);

    /// A dollar figure at `scale` times the headline size.
    fn price_figure(&mut self, price: f64, scale: f32, color: Color32);

    /// "▲ +$4.00" over "+3.96%", tinted by direction.
    fn change_figure(&mut self, headline: &Headline);

    /// The large number of a stat card.
    fn stat_value(&mut self, value: &str, color: Color32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.label));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.subsection_heading));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.error_text));
    }

    fn label_warning(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.warning));
    }

    fn price_figure(&mut self, price: f64, scale: f32, color: Color32) {
        let text = RichText::new(format_price(price))
            .size(UI_CONFIG.headline_font_size * scale)
            .color(color);
        // Only the full-size figure is bold
        self.label(if scale >= 1.0 { text.strong() } else { text });
    }

    fn change_figure(&mut self, headline: &Headline) {
        let (arrow, color) = change_style(headline.is_gain);
        self.label(
            RichText::new(format!("{} {}", arrow, headline.change_label()))
                .size(UI_CONFIG.headline_font_size * 0.6)
                .strong()
                .color(color),
        );
        self.label(RichText::new(headline.signed_percent_label()).color(color));
    }

    fn stat_value(&mut self, value: &str, color: Color32) {
        self.label(
            RichText::new(value)
                .size(UI_CONFIG.stat_font_size)
                .strong()
                .color(color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gains_and_losses_are_told_apart() {
        assert_eq!(change_style(true), ("▲", UI_CONFIG.colors.gain));
        assert_eq!(change_style(false), ("▼", UI_CONFIG.colors.loss));
        assert_ne!(UI_CONFIG.colors.gain, UI_CONFIG.colors.loss);
    }
}
