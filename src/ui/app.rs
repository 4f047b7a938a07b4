use eframe::{Frame, egui};
use poll_promise::Promise;
use strum_macros::{Display, EnumIter};

use crate::api::PredictionClient;
use crate::config::plot::PLOT_CONFIG;
use crate::domain::{FileCandidate, ModelInfo};
use crate::engine::{PredictionOutcome, Session, UploadOutcome};
use crate::error::AppError;
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The chart layers the user can switch on and off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum SeriesLayer {
    #[strum(serialize = "Actual Data")]
    Actual,
    #[strum(serialize = "Future Predictions")]
    Forecast,
    #[strum(serialize = "Model Fit")]
    ModelFit,
    #[strum(serialize = "Last Known Price Marker")]
    Boundary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotVisibility {
    pub actual: bool,
    pub forecast: bool,
    pub model_fit: bool,
    pub boundary: bool,
}

impl Default for PlotVisibility {
    fn default() -> Self {
        Self {
            actual: PLOT_CONFIG.show_actual,
            forecast: PLOT_CONFIG.show_forecast,
            model_fit: PLOT_CONFIG.show_model_fit,
            boundary: PLOT_CONFIG.show_boundary,
        }
    }
}

impl PlotVisibility {
    pub fn flag_mut(&mut self, layer: SeriesLayer) -> &mut bool {
        match layer {
            SeriesLayer::Actual => &mut self.actual,
            SeriesLayer::Forecast => &mut self.forecast,
            SeriesLayer::ModelFit => &mut self.model_fit,
            SeriesLayer::Boundary => &mut self.boundary,
        }
    }

    pub fn is_visible(&self, layer: SeriesLayer) -> bool {
        match layer {
            SeriesLayer::Actual => self.actual,
            SeriesLayer::Forecast => self.forecast,
            SeriesLayer::ModelFit => self.model_fit,
            SeriesLayer::Boundary => self.boundary,
        }
    }

    pub fn toggle(&mut self, layer: SeriesLayer) {
        let flag = self.flag_mut(layer);
        *flag = !*flag;
    }
}

/// Side-panel state of the `/model-info` lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModelInfoState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(ModelInfo),
    Failed(String),
}

impl ModelInfoState {
    pub fn time_steps(&self) -> Option<u64> {
        match self {
            ModelInfoState::Loaded(info) => Some(info.time_steps),
            _ => None,
        }
    }
}

pub struct ForecastApp {
    pub(super) session: Session,
    pub(super) client: PredictionClient,
    pub(super) plot_view: PlotView,
    pub(super) plot_visibility: PlotVisibility,
    pub(super) model_info: ModelInfoState,
    pub(super) path_input: String,
    /// A rejected file waiting for the user to acknowledge the notification
    pub(super) rejection: Option<AppError>,
    pub(super) show_help: bool,

    pub(super) prediction_promise: Option<Promise<PredictionOutcome>>,
    pub(super) upload_promise: Option<Promise<UploadOutcome>>,
    pub(super) model_info_promise: Option<Promise<Result<ModelInfo, String>>>,
}

impl ForecastApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        client: PredictionClient,
        initial_file: Option<FileCandidate>,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let mut app = Self {
            session: Session::new(),
            client,
            plot_view: PlotView::new(),
            plot_visibility: PlotVisibility::default(),
            model_info: ModelInfoState::default(),
            path_input: String::new(),
            rejection: None,
            show_help: false,
            prediction_promise: None,
            upload_promise: None,
            model_info_promise: None,
        };

        log::info!("Prediction service: {}", app.client.settings().base_url);

        if let Some(candidate) = initial_file {
            app.offer_file(candidate);
        }
        app.start_model_info_fetch();
        app
    }
}

impl eframe::App for ForecastApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_prediction(ctx);
        self.poll_upload(ctx);
        self.poll_model_info(ctx);

        self.handle_dropped_files(ctx);
        self.handle_global_shortcuts(ctx);

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
        self.render_help_panel(ctx);
        self.render_rejection_modal(ctx);
        self.render_drop_overlay(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!(
                "Shutting down (prediction pending: {}, upload pending: {})",
                self.prediction_promise.is_some(),
                self.upload_promise.is_some()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn model_fit_starts_hidden() {
        let visibility = PlotVisibility::default();
        assert!(visibility.actual);
        assert!(visibility.forecast);
        assert!(!visibility.model_fit);
    }

    #[test]
    fn toggle_flips_only_the_named_layer() {
        let mut visibility = PlotVisibility::default();
        visibility.toggle(SeriesLayer::ModelFit);
        assert!(visibility.is_visible(SeriesLayer::ModelFit));
        for layer in SeriesLayer::iter().filter(|l| *l != SeriesLayer::ModelFit) {
            assert_eq!(visibility.is_visible(layer), PlotVisibility::default().is_visible(layer));
        }
    }

    #[test]
    fn layer_names_match_legend() {
        assert_eq!(SeriesLayer::Actual.to_string(), "Actual Data");
        assert_eq!(SeriesLayer::Forecast.to_string(), "Future Predictions");
    }
}
