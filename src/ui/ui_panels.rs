use eframe::egui::{Button, Color32, Grid, RichText, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::config::plot::PLOT_CONFIG;
use crate::domain::SelectedFile;
use crate::engine::UploadStatus;
use crate::ui::app::{ModelInfoState, PlotVisibility, SeriesLayer};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{section_heading, spaced_separator};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

// ============================================================================
// FILE INTAKE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum IntakeEvent {
    OpenPath,
    Clear,
}

/// Shows the held file, or the drop hint plus the path field when nothing is held.
pub struct FileIntakePanel<'a> {
    file: Option<&'a SelectedFile>,
    path_input: &'a mut String,
    busy: bool,
}

impl<'a> FileIntakePanel<'a> {
    pub fn new(file: Option<&'a SelectedFile>, path_input: &'a mut String, busy: bool) -> Self {
        Self {
            file,
            path_input,
            busy,
        }
    }
}

impl<'a> Panel for FileIntakePanel<'a> {
    type Event = IntakeEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.intake_heading);

        match self.file {
            Some(file) => {
                ui.label(RichText::new(format!("📄 {}", file.name)).strong());
                ui.label_subdued(file.size_label());
                ui.add_space(4.0);
                if ui
                    .add_enabled(!self.busy, Button::new(UI_TEXT.intake_remove_button))
                    .clicked()
                {
                    events.push(IntakeEvent::Clear);
                }
            }
            None => {
                ui.group(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(6.0);
                        ui.label(RichText::new("⬆").size(24.0));
                        ui.label(UI_TEXT.intake_drop_hint);
                        ui.label_subdued(UI_TEXT.intake_columns_hint);
                        ui.add_space(6.0);
                    });
                });

                // Browsers hand us dropped bytes only; there is no filesystem to type a path into.
                if cfg!(not(target_arch = "wasm32")) {
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        let response = ui.add(
                            TextEdit::singleline(&mut *self.path_input)
                                .hint_text(UI_TEXT.intake_path_hint)
                                .desired_width(ui.available_width() - 70.0),
                        );
                        let submitted = response.lost_focus()
                            && ui.input(|i| i.key_pressed(eframe::egui::Key::Enter));
                        if ui.button(UI_TEXT.intake_open_button).clicked() || submitted {
                            events.push(IntakeEvent::OpenPath);
                        }
                    });
                }
            }
        }

        events
    }
}

// ============================================================================
// PREDICTION ACTIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum PredictEvent {
    Predict,
    UploadOnly,
}

pub struct PredictPanel<'a> {
    has_file: bool,
    predicting: bool,
    upload: &'a UploadStatus,
    uploading: bool,
    time_steps: Option<u64>,
}

impl<'a> PredictPanel<'a> {
    pub fn new(
        has_file: bool,
        predicting: bool,
        upload: &'a UploadStatus,
        uploading: bool,
        time_steps: Option<u64>,
    ) -> Self {
        Self {
            has_file,
            predicting,
            upload,
            uploading,
            time_steps,
        }
    }
}

impl<'a> Panel for PredictPanel<'a> {
    type Event = PredictEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.predict_heading);

        let steps = self
            .time_steps
            .map(|n| n.to_string())
            .unwrap_or_else(|| "few".to_string());
        ui.label_subdued(format!(
            "{}{}{}",
            UI_TEXT.predict_explainer_prefix, steps, UI_TEXT.predict_explainer_suffix
        ));
        ui.add_space(6.0);

        let label = if self.predicting {
            UI_TEXT.predict_button_busy
        } else {
            UI_TEXT.predict_button
        };
        let predict = Button::new(RichText::new(label).strong())
            .min_size([ui.available_width(), 28.0].into());
        if ui
            .add_enabled(self.has_file && !self.predicting, predict)
            .clicked()
        {
            events.push(PredictEvent::Predict);
        }
        if self.predicting {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label_subdued(UI_TEXT.loading_heading);
            });
        }

        ui.add_space(4.0);
        if ui
            .add_enabled(
                self.has_file && !self.uploading,
                Button::new(UI_TEXT.upload_button).small(),
            )
            .clicked()
        {
            events.push(PredictEvent::UploadOnly);
        }

        match self.upload {
            UploadStatus::Idle => {}
            UploadStatus::Pending => ui.label_subdued(UI_TEXT.upload_pending),
            UploadStatus::Stored(receipt) => {
                ui.metric("Stored", &receipt.filename, UI_CONFIG.colors.gain);
                ui.metric("Size", &format!("{} bytes", receipt.size), Color32::LIGHT_GRAY);
            }
            UploadStatus::Failed(message) => ui.label_error(message),
        }

        events
    }
}

// ============================================================================
// MODEL INFO
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ModelInfoEvent {
    Refresh,
}

pub struct ModelInfoPanel<'a> {
    state: &'a ModelInfoState,
    base_url: &'a str,
}

impl<'a> ModelInfoPanel<'a> {
    pub fn new(state: &'a ModelInfoState, base_url: &'a str) -> Self {
        Self { state, base_url }
    }
}

impl<'a> Panel for ModelInfoPanel<'a> {
    type Event = ModelInfoEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            section_heading(ui, UI_TEXT.model_heading);
            let loading = matches!(self.state, ModelInfoState::Loading);
            if ui
                .add_enabled(!loading, Button::new(UI_TEXT.model_refresh_button).small())
                .clicked()
            {
                events.push(ModelInfoEvent::Refresh);
            }
        });

        match self.state {
            ModelInfoState::NotLoaded => {}
            ModelInfoState::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label_subdued(UI_TEXT.model_loading);
                });
            }
            ModelInfoState::Loaded(info) => {
                ui.label_subheader(&info.model);
                Grid::new("model_info_grid")
                    .num_columns(2)
                    .spacing([12.0, 2.0])
                    .show(ui, |ui| {
                        let rows = [
                            ("Time steps", info.time_steps.to_string()),
                            ("Input dims", info.input_dims.to_string()),
                            ("LSTM units", info.lstm_units.to_string()),
                            ("Train min", format!("{:.2}", info.train_min)),
                            ("Train max", format!("{:.2}", info.train_max)),
                        ];
                        for (label, value) in rows {
                            ui.label_subdued(label);
                            ui.label(RichText::new(value).small().color(Color32::LIGHT_GRAY));
                            ui.end_row();
                        }
                    });
            }
            ModelInfoState::Failed(message) => ui.label_warning(message),
        }

        ui.add_space(4.0);
        ui.label_subdued(format!("🌐 {}", self.base_url));
        events
    }
}

// ============================================================================
// CHART LAYERS
// ============================================================================

pub struct LayerPanel<'a> {
    visibility: &'a mut PlotVisibility,
}

impl<'a> LayerPanel<'a> {
    pub fn new(visibility: &'a mut PlotVisibility) -> Self {
        Self { visibility }
    }
}

impl<'a> Panel for LayerPanel<'a> {
    type Event = SeriesLayer;

    /// Emits the layers whose visibility changed this frame.
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut changed = Vec::new();
        spaced_separator(ui);
        section_heading(ui, UI_TEXT.layers_heading);

        for layer in SeriesLayer::iter() {
            let color = match layer {
                SeriesLayer::Actual => PLOT_CONFIG.actual_color,
                SeriesLayer::Forecast => PLOT_CONFIG.forecast_color,
                SeriesLayer::ModelFit => PLOT_CONFIG.model_fit_color,
                SeriesLayer::Boundary => PLOT_CONFIG.boundary_color,
            };
            let flag = self.visibility.flag_mut(layer);
            let text = RichText::new(layer.to_string()).color(color);
            if ui.checkbox(flag, text).changed() {
                changed.push(layer);
            }
        }
        changed
    }
}
