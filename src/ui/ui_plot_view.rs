use std::sync::Arc;

use eframe::egui;
use egui_plot::{AxisHints, Corner, GridInput, GridMark, HPlacement, Legend, Plot, PlotPoint};

use crate::config::plot::PLOT_CONFIG;
use crate::models::ForecastView;
use crate::ui::app::PlotVisibility;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_price;
use crate::utils::TimeUtils;

use crate::ui::plot_layers::{
    ActualLayer, BoundaryLayer, ForecastLayer, LayerContext, ModelFitLayer, PlotLayer,
};

/// Everything derived from a `ForecastView` that the plot needs on every frame.
#[derive(Clone)]
pub struct PlotCache {
    /// Short axis labels, one per index of the combined date axis
    pub labels: Arc<Vec<String>>,
    pub y_min: f64,
    pub y_max: f64,
    pub x_min: f64,
    pub x_max: f64,
    /// Distance between labelled x ticks, in axis indices
    pub label_step: usize,
    pub includes_model_fit: bool,
}

#[derive(Default)]
pub struct PlotView {
    source: Option<Arc<ForecastView>>,
    cache: Option<PlotCache>,
}

impl PlotView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_cache(&mut self) {
        self.source = None;
        self.cache = None;
    }

    pub fn has_cache(&self) -> bool {
        self.cache.is_some()
    }

    pub fn show_my_plot(
        &mut self,
        ui: &mut egui::Ui,
        view: &Arc<ForecastView>,
        visibility: &PlotVisibility,
    ) {
        let cache = self.calculate_plot_data(view, visibility.model_fit);

        let hover_labels = Arc::clone(&cache.labels);
        let step = cache.label_step;
        let x_max = cache.x_max;

        Plot::new("forecast_plot")
            .legend(Legend::default().position(Corner::LeftTop))
            .height(ui.available_height().max(PLOT_CONFIG.min_height))
            .custom_x_axes(vec![create_x_axis(&cache)])
            .custom_y_axes(vec![create_y_axis()])
            .label_formatter(move |name, point: &PlotPoint| {
                let date = label_at(&hover_labels, point.x).unwrap_or_default();
                if name.is_empty() {
                    format!("{}\n{}", date, format_price(point.y))
                } else {
                    format!("{}\n{}: {}", date, name, format_price(point.y))
                }
            })
            .x_grid_spacer(move |input: GridInput| index_marks(input, step, x_max))
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_y(cache.y_min..=cache.y_max);
                plot_ui.set_plot_bounds_x(cache.x_min..=cache.x_max);

                // --- LAYER RENDERING SYSTEM ---

                // 1. Create Context
                let ctx = LayerContext {
                    view: view.as_ref(),
                    visibility,
                };

                // 2. Define Layer Stack (Back to Front)
                let layers: Vec<Box<dyn PlotLayer>> = vec![
                    Box::new(ModelFitLayer),
                    Box::new(BoundaryLayer),
                    Box::new(ActualLayer),
                    Box::new(ForecastLayer),
                ];

                // 3. Render Loop
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }

    fn calculate_plot_data(&mut self, view: &Arc<ForecastView>, include_model_fit: bool) -> PlotCache {
        if let (Some(source), Some(cache)) = (&self.source, &self.cache) {
            if Arc::ptr_eq(source, view) && cache.includes_model_fit == include_model_fit {
                return cache.clone();
            }
        }

        let cache = build_plot_cache(view, include_model_fit);
        self.source = Some(Arc::clone(view));
        self.cache = Some(cache.clone());
        cache
    }
}

pub(crate) fn build_plot_cache(view: &ForecastView, include_model_fit: bool) -> PlotCache {
    let labels: Vec<String> = view
        .dates
        .iter()
        .map(|d| TimeUtils::short_date_label(d))
        .collect();

    let (y_min, y_max) = padded_range(view.value_range(include_model_fit).unwrap_or((0.0, 1.0)));
    let last_index = view.len().saturating_sub(1) as f64;

    PlotCache {
        label_step: label_step(view.len(), PLOT_CONFIG.max_x_labels),
        labels: Arc::new(labels),
        y_min,
        y_max,
        x_min: -0.5,
        x_max: last_index + 0.5,
        includes_model_fit: include_model_fit,
    }
}

/// Keep at most `max_labels` ticks on the date axis.
pub(crate) fn label_step(len: usize, max_labels: usize) -> usize {
    if max_labels == 0 {
        return len.max(1);
    }
    len.div_ceil(max_labels).max(1)
}

/// 5% headroom above and below; flat series get a band around the value.
pub(crate) fn padded_range((min, max): (f64, f64)) -> (f64, f64) {
    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.05
    } else if min != 0.0 {
        min.abs() * 0.01
    } else {
        1.0
    };
    (min - pad, max + pad)
}

fn label_at(labels: &[String], x: f64) -> Option<String> {
    let rounded = x.round();
    if rounded < 0.0 {
        return None;
    }
    labels.get(rounded as usize).cloned()
}

fn index_marks(input: GridInput, step: usize, x_max: f64) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let step_size = step as f64;
    let start = (min.max(0.0) / step_size).ceil() as i64;
    let end = (max.min(x_max) / step_size).floor() as i64;

    (start..=end)
        .map(|i| GridMark {
            value: i as f64 * step_size,
            step_size,
        })
        .collect()
}

fn create_x_axis(plot_cache: &PlotCache) -> AxisHints<'static> {
    let labels = Arc::clone(&plot_cache.labels);
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(move |grid_mark, _range| {
            let x = grid_mark.value;
            if x.fract() != 0.0 {
                return String::new();
            }
            label_at(&labels, x).unwrap_or_default()
        })
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis)
        .formatter(|grid_mark, _range| format_price(grid_mark.value))
        .placement(HPlacement::Left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PredictionMetadata, PredictionResponse, PredictionSeries};

    fn view() -> ForecastView {
        let response = PredictionResponse {
            actual_data: PredictionSeries {
                dates: vec![
                    "2024-01-01 00:00:00".into(),
                    "2024-01-02 00:00:00".into(),
                    "2024-01-03 00:00:00".into(),
                ],
                values: vec![100.0, 102.0, 101.0],
            },
            historical_predictions: PredictionSeries::default(),
            future_predictions: PredictionSeries {
                dates: vec!["2024-01-04".into()],
                values: vec![105.0],
            },
            metadata: PredictionMetadata {
                total_input_records: 3,
                prediction_periods: 1,
                model_time_steps: 2,
            },
        };
        ForecastView::from_response(&response).expect("valid response")
    }

    #[test]
    fn label_step_caps_tick_count() {
        assert_eq!(label_step(4, 20), 1);
        assert_eq!(label_step(40, 20), 2);
        assert_eq!(label_step(41, 20), 3);
        assert_eq!(label_step(0, 20), 1);
    }

    #[test]
    fn padded_range_handles_flat_series() {
        let (lo, hi) = padded_range((100.0, 100.0));
        assert!(lo < 100.0 && hi > 100.0);
        let (lo, hi) = padded_range((0.0, 0.0));
        assert_eq!((lo, hi), (-1.0, 1.0));
    }

    #[test]
    fn cache_spans_full_axis() {
        let cache = build_plot_cache(&view(), false);
        assert_eq!(cache.labels.len(), 4);
        assert_eq!(cache.labels[3], "2024-01-04");
        assert!(cache.y_min < 100.0 && cache.y_max > 105.0);
        assert_eq!(cache.x_max, 3.5);
    }

    #[test]
    fn toggling_model_fit_rebuilds_cache() {
        let shared = Arc::new(view());
        let mut plot_view = PlotView::new();

        let without_fit = plot_view.calculate_plot_data(&shared, false);
        assert!(!without_fit.includes_model_fit);

        let with_fit = plot_view.calculate_plot_data(&shared, true);
        assert!(with_fit.includes_model_fit);
        assert!(!Arc::ptr_eq(&without_fit.labels, &with_fit.labels));
    }

    #[test]
    fn plot_view_reuses_cache_for_same_result() {
        let shared = Arc::new(view());
        let mut plot_view = PlotView::new();
        let first = plot_view.calculate_plot_data(&shared, false);
        assert!(plot_view.has_cache());
        let second = plot_view.calculate_plot_data(&shared, false);
        assert!(Arc::ptr_eq(&first.labels, &second.labels));

        plot_view.clear_cache();
        assert!(!plot_view.has_cache());
    }
}
