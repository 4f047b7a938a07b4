use std::sync::Arc;

use eframe::egui::{
    Align, Align2, CentralPanel, Color32, Context, Frame, Grid, Id, Key, Layout, Margin, Modal,
    Order, LayerId, RichText, ScrollArea, SidePanel, TextStyle, TopBottomPanel, Ui, Window,
};

use crate::error::AppError;
use crate::models::ForecastView;
use crate::ui::app::SeriesLayer;
use crate::ui::ui_panels::{
    FileIntakePanel, IntakeEvent, LayerPanel, ModelInfoEvent, ModelInfoPanel, Panel, PredictEvent,
    PredictPanel,
};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{card_frame, spaced_separator};
use crate::utils::app_time::format_duration_short;

use super::app::ForecastApp;

impl ForecastApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::same(10));
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical().id_salt("side_panel_scroll").show(ui, |ui| {
                    let intake_events = self.file_intake_panel(ui);
                    spaced_separator(ui);
                    let predict_events = self.predict_panel(ui);
                    spaced_separator(ui);
                    let model_events = self.model_info_panel(ui);
                    let layer_events = self.layer_panel(ui);

                    for event in intake_events {
                        match event {
                            IntakeEvent::OpenPath => self.open_typed_path(),
                            IntakeEvent::Clear => self.clear_selected_file(),
                        }
                    }

                    for event in predict_events {
                        match event {
                            PredictEvent::Predict => self.start_prediction(),
                            PredictEvent::UploadOnly => self.start_upload(),
                        }
                    }

                    for event in model_events {
                        match event {
                            ModelInfoEvent::Refresh => self.start_model_info_fetch(),
                        }
                    }

                    for layer in layer_events {
                        log::debug!(
                            "Layer '{}' now {}",
                            layer,
                            if self.plot_visibility.is_visible(layer) { "shown" } else { "hidden" }
                        );
                    }
                });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(16));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new(UI_TEXT.app_title).strong().color(UI_CONFIG.colors.heading));
                    ui.label_subdued(UI_TEXT.app_subtitle);
                });
                ui.add_space(12.0);

                if let Some(error) = self.session.error() {
                    render_error_card(ui, error);
                    ui.add_space(12.0);
                }

                if self.session.is_predicting() {
                    render_loading_state(ui);
                } else if let Some(view) = self.session.result().map(Arc::clone) {
                    render_headline_card(ui, &view);
                    ui.add_space(12.0);
                    render_stats_grid(ui, &view);
                    ui.add_space(12.0);
                    ui.label_subheader(UI_TEXT.plot_title);
                    self.plot_view.show_my_plot(ui, &view, &self.plot_visibility);
                } else if self.session.error().is_none() {
                    render_empty_state(ui);
                }
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. Service
                    ui.metric("🌐 API", &self.client.settings().base_url, UI_CONFIG.colors.status_service);
                    ui.separator();

                    // 2. Held file
                    match self.session.file() {
                        Some(file) => ui.metric("📄", &format!("{} ({})", file.name, file.size_label()), Color32::LIGHT_GRAY),
                        None => ui.label_subdued("📄 No file selected"),
                    }
                    ui.separator();

                    // 3. Model
                    if let Some(steps) = self.model_info.time_steps() {
                        ui.metric("🧠 Time steps", &steps.to_string(), UI_CONFIG.colors.status_model);
                        ui.separator();
                    }

                    // 4. Request status
                    if self.session.is_predicting() {
                        ui.label_warning("⚙ Predicting...");
                    } else if let Some(elapsed) = self.session.last_elapsed() {
                        ui.metric("⏱ Last prediction", &format_duration_short(elapsed), UI_CONFIG.colors.status_timing);
                    }
                    if self.session.is_uploading() {
                        ui.separator();
                        ui.label_warning(UI_TEXT.upload_pending);
                    }

                    #[cfg(debug_assertions)]
                    {
                        ui.separator();
                        ui.label_subdued(format!("gen {}", self.session.generation()));
                    }
                });
            });
    }

    /// Blocking notification for a file that could not be accepted.
    pub(super) fn render_rejection_modal(&mut self, ctx: &Context) {
        let Some(rejection) = self.rejection.clone() else {
            return;
        };

        let mut acknowledged = false;
        let response = Modal::new(Id::new("file_rejection_modal")).show(ctx, |ui| {
            ui.set_width(320.0);
            ui.heading(UI_TEXT.intake_rejected_title);
            ui.add_space(8.0);
            ui.label_error(rejection.to_string());
            if matches!(rejection, AppError::InvalidFileType(_)) {
                ui.add_space(4.0);
                ui.label_subdued(UI_TEXT.intake_columns_hint);
            }
            ui.add_space(12.0);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });
        });

        if acknowledged || response.should_close() {
            self.rejection = None;
        }
    }

    /// Dim the window while a file is dragged over it.
    pub(super) fn render_drop_overlay(&self, ctx: &Context) {
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        if !hovering {
            return;
        }

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_overlay")));
        #[allow(deprecated)]
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            UI_TEXT.intake_drop_active,
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }

    fn render_shortcut_rows(ui: &mut Ui, rows: &[(&str, &str)]) {
        for (key, description) in rows {
            ui.label(RichText::new(*key).monospace().strong());
            ui.label(*description);
            ui.end_row();
        }
    }

    pub(super) fn render_help_panel(&mut self, ctx: &Context) {
        Window::new("⌨️ Keyboard Shortcuts")
            .open(&mut self.show_help)
            .resizable(false)
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.label("Press any key to execute the command:");
                ui.add_space(5.0);

                let shortcuts = [
                    ("H", "Toggle this help panel"),
                    ("P", "Predict next day for the selected file"),
                    ("U", "Upload the selected file without predicting"),
                    ("Delete", "Remove the selected file"),
                    ("R", "Refresh model information"),
                    ("1", "Toggle Actual Data"),
                    ("2", "Toggle Future Predictions"),
                    ("3", "Toggle Model Fit"),
                ];

                Grid::new("general_shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        Self::render_shortcut_rows(ui, &shortcuts);
                    });

                ui.add_space(10.0);
                ui.separator();
                ui.add_space(5.0);
                ui.label_subdued(UI_TEXT.intake_columns_hint);
            });
    }

    fn file_intake_panel(&mut self, ui: &mut Ui) -> Vec<IntakeEvent> {
        let busy = self.session.is_predicting();
        let mut panel = FileIntakePanel::new(self.session.file(), &mut self.path_input, busy);
        panel.render(ui)
    }

    fn predict_panel(&mut self, ui: &mut Ui) -> Vec<PredictEvent> {
        let mut panel = PredictPanel::new(
            self.session.file().is_some(),
            self.session.is_predicting(),
            self.session.upload_status(),
            self.session.is_uploading(),
            self.model_info.time_steps(),
        );
        panel.render(ui)
    }

    fn model_info_panel(&mut self, ui: &mut Ui) -> Vec<ModelInfoEvent> {
        let mut panel = ModelInfoPanel::new(&self.model_info, &self.client.settings().base_url);
        panel.render(ui)
    }

    fn layer_panel(&mut self, ui: &mut Ui) -> Vec<SeriesLayer> {
        let mut panel = LayerPanel::new(&mut self.plot_visibility);
        panel.render(ui)
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        // Typing a path must not trigger commands
        if ctx.wants_keyboard_input() || self.rejection.is_some() {
            return;
        }

        let (predict, upload, clear, refresh) = ctx.input(|i| {
            if i.key_pressed(Key::H) {
                self.show_help = !self.show_help;
            }
            if i.key_pressed(Key::Escape) && self.show_help {
                self.show_help = false;
            }

            // Use 1/2/3 keys to toggle plot visibility
            if i.key_pressed(Key::Num1) {
                self.plot_visibility.toggle(SeriesLayer::Actual);
            }
            if i.key_pressed(Key::Num2) {
                self.plot_visibility.toggle(SeriesLayer::Forecast);
            }
            if i.key_pressed(Key::Num3) {
                self.plot_visibility.toggle(SeriesLayer::ModelFit);
            }

            (
                i.key_pressed(Key::P),
                i.key_pressed(Key::U),
                i.key_pressed(Key::Delete),
                i.key_pressed(Key::R),
            )
        });

        if predict {
            self.start_prediction();
        }
        if upload && self.session.file().is_some() {
            self.start_upload();
        }
        if clear && self.session.file().is_some() && !self.session.is_predicting() {
            self.clear_selected_file();
        }
        if refresh {
            self.start_model_info_fetch();
        }
    }
}

fn render_error_card(ui: &mut Ui, error: &AppError) {
    card_frame(UI_CONFIG.colors.error_fill, 12).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label_error(format!("⚠ {}", UI_TEXT.error_heading));
        ui.add_space(4.0);
        ui.label(RichText::new(error.to_string()).color(UI_CONFIG.colors.error_detail));
    });
}

fn render_loading_state(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.spinner();
        ui.add_space(12.0);
        ui.heading(UI_TEXT.loading_heading);
        ui.add_space(6.0);
        ui.label(RichText::new(UI_TEXT.loading_detail).color(Color32::from_gray(190)));
    });
}

fn render_empty_state(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new("📈").size(48.0));
        ui.add_space(12.0);
        ui.heading(UI_TEXT.empty_heading);
        ui.add_space(6.0);
        ui.label(RichText::new(UI_TEXT.empty_detail).color(Color32::from_gray(190)));
        ui.add_space(24.0);

        ui.label_subheader(UI_TEXT.guide_heading);
        ui.add_space(4.0);
        for (i, step) in UI_TEXT.guide_steps.iter().enumerate() {
            ui.label_subdued(format!("{}. {}", i + 1, step));
        }
    });
}

fn render_headline_card(ui: &mut Ui, view: &ForecastView) {
    let headline = &view.headline;
    let card_text = UI_CONFIG.colors.card_text;

    card_frame(UI_CONFIG.colors.card, 16).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(UI_TEXT.headline_label).strong().color(card_text));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label_subdued(format!("📅 {}", headline.prediction_date));
            });
        });
        ui.add_space(8.0);

        ui.columns(3, |cols| {
            cols[0].label_subdued(UI_TEXT.headline_predicted_label);
            cols[0].price_figure(headline.predicted, 1.0, card_text);

            cols[1].label_subdued(UI_TEXT.headline_last_label);
            cols[1].price_figure(headline.last_actual, 0.6, card_text.gamma_multiply(0.8));

            cols[2].label_subdued(UI_TEXT.headline_change_label);
            cols[2].change_figure(headline);
        });
    });
}

fn render_stats_grid(ui: &mut Ui, view: &ForecastView) {
    let summary = &view.summary;
    ui.columns(3, |cols| {
        stat_card(
            &mut cols[0],
            UI_TEXT.stat_records_title,
            &summary.total_input_records.to_string(),
            UI_TEXT.stat_records_detail,
            UI_CONFIG.colors.stat_records,
        );
        stat_card(
            &mut cols[1],
            UI_TEXT.stat_horizon_title,
            &view.horizon_label(),
            UI_TEXT.stat_horizon_detail,
            UI_CONFIG.colors.stat_horizon,
        );
        stat_card(
            &mut cols[2],
            UI_TEXT.stat_steps_title,
            &summary.model_time_steps.to_string(),
            UI_TEXT.stat_steps_detail,
            UI_CONFIG.colors.stat_steps,
        );
    });
}

fn stat_card(ui: &mut Ui, title: &str, value: &str, detail: &str, color: Color32) {
    card_frame(ui.visuals().faint_bg_color, 10).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label_subdued(title);
        ui.stat_value(value, color);
        ui.label_subdued(detail);
    });
}
