use egui_plot::{Line, LineStyle, PlotPoints, PlotUi, Points, VLine};

use crate::config::plot::PLOT_CONFIG;
use crate::models::ForecastView;
use crate::ui::app::PlotVisibility;
use crate::ui::ui_text::UI_TEXT;

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub view: &'a ForecastView,
    pub visibility: &'a PlotVisibility,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

/// Split a gappy series into runs of consecutive points, indexed on the shared date axis.
/// `None` breaks the line, so the two series never draw across each other's half.
pub(crate) fn contiguous_segments(values: &[Option<f64>]) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();

    for (i, value) in values.iter().enumerate() {
        match value {
            Some(v) => current.push([i as f64, *v]),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Draws one gappy series as lines plus point markers. Every segment shares `name` so the
/// legend shows a single entry.
fn draw_series(plot_ui: &mut PlotUi, name: &str, values: &[Option<f64>], style: SeriesStyle) {
    for segment in contiguous_segments(values) {
        let line = Line::new(name, PlotPoints::new(segment.clone()))
            .color(style.color)
            .width(PLOT_CONFIG.line_width)
            .style(style.line);
        plot_ui.line(line);

        plot_ui.points(
            Points::new(name, PlotPoints::new(segment))
                .radius(PLOT_CONFIG.point_radius)
                .color(style.color),
        );
    }
}

#[derive(Clone, Copy)]
struct SeriesStyle {
    color: eframe::egui::Color32,
    line: LineStyle,
}

// ============================================================================
// 1. MODEL FIT LAYER (in-sample predictions, drawn underneath)
// ============================================================================
pub struct ModelFitLayer;

impl PlotLayer for ModelFitLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.visibility.model_fit {
            return;
        }
        draw_series(
            plot_ui,
            UI_TEXT.label_model_fit,
            &ctx.view.model_fit,
            SeriesStyle {
                color: PLOT_CONFIG.model_fit_color.linear_multiply(0.7),
                line: LineStyle::dotted_dense(),
            },
        );
    }
}

// ============================================================================
// 2. ACTUAL LAYER (solid blue)
// ============================================================================
pub struct ActualLayer;

impl PlotLayer for ActualLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.visibility.actual {
            return;
        }
        draw_series(
            plot_ui,
            UI_TEXT.label_actual,
            &ctx.view.actual,
            SeriesStyle {
                color: PLOT_CONFIG.actual_color,
                line: LineStyle::Solid,
            },
        );
    }
}

// ============================================================================
// 3. FORECAST LAYER (dashed red, bridged from the last actual point)
// ============================================================================
pub struct ForecastLayer;

impl PlotLayer for ForecastLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.visibility.forecast {
            return;
        }
        draw_series(
            plot_ui,
            UI_TEXT.label_forecast,
            &ctx.view.forecast,
            SeriesStyle {
                color: PLOT_CONFIG.forecast_color,
                line: LineStyle::Dashed {
                    length: PLOT_CONFIG.forecast_dash_length,
                },
            },
        );
    }
}

// ============================================================================
// 4. BOUNDARY LAYER (where history ends)
// ============================================================================
pub struct BoundaryLayer;

impl PlotLayer for BoundaryLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.visibility.boundary {
            return;
        }
        plot_ui.vline(
            VLine::new(UI_TEXT.label_boundary, ctx.view.boundary_index() as f64)
                .color(PLOT_CONFIG.boundary_color)
                .width(1.0)
                .style(LineStyle::dashed_loose()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_break_on_gaps() {
        let values = [Some(1.0), Some(2.0), None, None, Some(5.0)];
        let segments = contiguous_segments(&values);
        assert_eq!(segments, vec![vec![[0.0, 1.0], [1.0, 2.0]], vec![[4.0, 5.0]]]);
    }

    #[test]
    fn forecast_segment_starts_at_boundary() {
        // actual [100, 102, 101], future [105]
        let forecast = [None, None, Some(101.0), Some(105.0)];
        let segments = contiguous_segments(&forecast);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].first(), Some(&[2.0, 101.0]));
        assert_eq!(segments[0].last(), Some(&[3.0, 105.0]));
    }

    #[test]
    fn all_gaps_yield_nothing() {
        assert!(contiguous_segments(&[None, None]).is_empty());
        assert!(contiguous_segments(&[]).is_empty());
    }
}
