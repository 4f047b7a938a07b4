//! Display-ready series derived from a [`PredictionResponse`].
//!
//! Everything here is a pure function of the response: the same response
//! always produces the same view.

use std::collections::HashMap;

use crate::domain::{PredictionMetadata, PredictionResponse, PredictionSeries};
use crate::error::AppError;

/// The headline numbers of the prediction card.
#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    /// Date of the first forecast point
    pub prediction_date: String,
    pub predicted: f64,
    pub last_actual: f64,
    /// `predicted - last_actual`
    pub change: f64,
    /// Percent change rounded to two decimals
    pub percent_change: f64,
    pub is_gain: bool,
}

impl Headline {
    fn compute(actual: &PredictionSeries, future: &PredictionSeries) -> Result<Self, AppError> {
        let predicted = future
            .first_value()
            .ok_or_else(|| AppError::DegenerateResponse("no forecast points".to_string()))?;
        let last_actual = actual
            .last_value()
            .ok_or_else(|| AppError::DegenerateResponse("no actual data points".to_string()))?;

        if last_actual == 0.0 || !last_actual.is_finite() {
            return Err(AppError::DegenerateResponse(format!(
                "last actual price {} cannot be used as a baseline",
                last_actual
            )));
        }

        let change = predicted - last_actual;
        let percent_change = round_2dp(change / last_actual * 100.0);

        Ok(Self {
            prediction_date: future.dates.first().cloned().unwrap_or_default(),
            predicted,
            last_actual,
            change,
            percent_change,
            is_gain: change >= 0.0,
        })
    }

    /// Percent change as a plain two-decimal string, e.g. `"3.96"`
    pub fn percent_label(&self) -> String {
        format!("{:.2}", self.percent_change)
    }

    /// `"+3.96%"` for gains, `"-5.94%"` for declines
    pub fn signed_percent_label(&self) -> String {
        let sign = if self.is_gain { "+" } else { "" };
        format!("{}{}%", sign, self.percent_label())
    }

    /// Absolute change with a `+` prefix only on gains, e.g. `"+$4.00"` / `"$6.00"`
    pub fn change_label(&self) -> String {
        let sign = if self.is_gain { "+" } else { "" };
        format!("{}${:.2}", sign, self.change.abs())
    }
}

/// Chart-ready series on one combined date axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastView {
    /// `actual.dates` followed by `future.dates`
    pub dates: Vec<String>,
    /// Actual prices, then `None` for every forecast date
    pub actual: Vec<Option<f64>>,
    /// `None` up to the last actual point, which is repeated to bridge the lines, then the forecast
    pub forecast: Vec<Option<f64>>,
    /// Model fit placed on the axis by date; `None` where the fit has no value
    pub model_fit: Vec<Option<f64>>,
    pub headline: Headline,
    /// Passed through verbatim from the response
    pub summary: PredictionMetadata,
}

impl ForecastView {
    pub fn from_response(response: &PredictionResponse) -> Result<Self, AppError> {
        let actual = &response.actual_data;
        let future = &response.future_predictions;

        check_aligned("actual_data", actual)?;
        check_aligned("future_predictions", future)?;

        let headline = Headline::compute(actual, future)?;

        let dates: Vec<String> = actual.dates.iter().chain(&future.dates).cloned().collect();

        let actual_line: Vec<Option<f64>> = actual
            .values
            .iter()
            .copied()
            .map(Some)
            .chain(std::iter::repeat_n(None, future.dates.len()))
            .collect();

        let forecast_line: Vec<Option<f64>> = std::iter::repeat_n(None, actual.dates.len() - 1)
            .chain(std::iter::once(Some(headline.last_actual)))
            .chain(future.values.iter().copied().map(Some))
            .collect();

        let model_fit = place_on_axis(&dates, &response.historical_predictions);

        Ok(Self {
            dates,
            actual: actual_line,
            forecast: forecast_line,
            model_fit,
            headline,
            summary: response.metadata,
        })
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Index of the last actual point on the combined axis
    pub fn boundary_index(&self) -> usize {
        self.actual.iter().rposition(Option::is_some).unwrap_or(0)
    }

    /// "1 Day" / "5 Days"
    pub fn horizon_label(&self) -> String {
        let periods = self.summary.prediction_periods;
        if periods == 1 {
            "1 Day".to_string()
        } else {
            format!("{} Days", periods)
        }
    }

    /// Min/max over the drawn values, optionally including the model fit.
    pub fn value_range(&self, include_model_fit: bool) -> Option<(f64, f64)> {
        let fit: &[Option<f64>] = if include_model_fit { &self.model_fit } else { &[] };

        self.actual
            .iter()
            .chain(&self.forecast)
            .chain(fit)
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

fn check_aligned(name: &str, series: &PredictionSeries) -> Result<(), AppError> {
    if series.is_aligned() {
        Ok(())
    } else {
        Err(AppError::DegenerateResponse(format!(
            "{} has {} dates but {} values",
            name,
            series.dates.len(),
            series.values.len()
        )))
    }
}

/// Put each point of `series` at the first axis position carrying the same date.
fn place_on_axis(axis: &[String], series: &PredictionSeries) -> Vec<Option<f64>> {
    let mut placed = vec![None; axis.len()];
    if series.is_empty() {
        return placed;
    }
    if !series.is_aligned() {
        log::warn!(
            "historical_predictions misaligned ({} dates, {} values); plotting the overlap",
            series.dates.len(),
            series.values.len()
        );
    }

    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(axis.len());
    for (idx, date) in axis.iter().enumerate() {
        positions.entry(date.as_str()).or_insert(idx);
    }

    for (date, value) in series.dates.iter().zip(&series.values) {
        if let Some(&idx) = positions.get(date.as_str()) {
            placed[idx] = Some(*value);
        }
    }
    placed
}

fn round_2dp(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid rendering "-0.00"
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(dates: &[&str], values: &[f64]) -> PredictionSeries {
        PredictionSeries {
            dates: dates.iter().map(|d| d.to_string()).collect(),
            values: values.to_vec(),
        }
    }

    fn response(actual: &[f64], future: &[f64]) -> PredictionResponse {
        let actual_dates: Vec<String> = (0..actual.len()).map(|i| format!("2024-01-{:02}", i + 1)).collect();
        let future_dates: Vec<String> = (0..future.len()).map(|i| format!("2024-02-{:02}", i + 1)).collect();
        PredictionResponse {
            actual_data: PredictionSeries {
                dates: actual_dates.clone(),
                values: actual.to_vec(),
            },
            historical_predictions: PredictionSeries {
                dates: actual_dates,
                values: actual.iter().map(|v| v - 0.5).collect(),
            },
            future_predictions: PredictionSeries {
                dates: future_dates,
                values: future.to_vec(),
            },
            metadata: PredictionMetadata {
                total_input_records: 9,
                prediction_periods: future.len() as u64,
                model_time_steps: 6,
            },
        }
    }

    #[test]
    fn headline_for_a_gain() {
        let view = ForecastView::from_response(&response(&[100.0, 102.0, 101.0], &[105.0])).unwrap();

        assert_eq!(view.len(), 4);
        assert_eq!(view.headline.predicted, 105.0);
        assert_eq!(view.headline.last_actual, 101.0);
        assert_eq!(view.headline.change, 4.0);
        assert_eq!(view.headline.percent_label(), "3.96");
        assert!(view.headline.is_gain);
        assert_eq!(view.headline.signed_percent_label(), "+3.96%");
        assert_eq!(view.headline.change_label(), "+$4.00");
        assert_eq!(view.headline.prediction_date, "2024-02-01");
    }

    #[test]
    fn headline_for_a_decline() {
        let view = ForecastView::from_response(&response(&[100.0, 102.0, 101.0], &[95.0])).unwrap();

        assert!(view.headline.percent_change < 0.0);
        assert!(!view.headline.is_gain);
        assert_eq!(view.headline.percent_label(), "-5.94");
        assert_eq!(view.headline.change_label(), "$6.00");
    }

    #[test]
    fn series_are_aligned_on_the_combined_axis() {
        let view = ForecastView::from_response(&response(&[100.0, 102.0, 101.0], &[105.0, 106.0])).unwrap();

        assert_eq!(
            view.dates,
            vec!["2024-01-01", "2024-01-02", "2024-01-03", "2024-02-01", "2024-02-02"]
        );
        assert_eq!(
            view.actual,
            vec![Some(100.0), Some(102.0), Some(101.0), None, None]
        );
        assert_eq!(
            view.forecast,
            vec![None, None, Some(101.0), Some(105.0), Some(106.0)]
        );
        assert_eq!(view.boundary_index(), 2);
        assert_eq!(view.horizon_label(), "2 Days");
    }

    #[test]
    fn counters_pass_through() {
        let view = ForecastView::from_response(&response(&[10.0], &[11.0])).unwrap();
        assert_eq!(view.summary.total_input_records, 9);
        assert_eq!(view.summary.prediction_periods, 1);
        assert_eq!(view.summary.model_time_steps, 6);
        assert_eq!(view.horizon_label(), "1 Day");
        // A single actual point is its own bridge
        assert_eq!(view.forecast, vec![Some(10.0), Some(11.0)]);
    }

    #[test]
    fn identical_responses_render_identically() {
        let body = response(&[100.0, 102.0, 101.0], &[105.0]);
        let first = ForecastView::from_response(&body).unwrap();
        let second = ForecastView::from_response(&body.clone()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_actual_data_is_an_error_not_a_panic() {
        let err = ForecastView::from_response(&response(&[], &[105.0])).unwrap_err();
        assert!(matches!(err, AppError::DegenerateResponse(_)));
    }

    #[test]
    fn empty_forecast_is_an_error() {
        let err = ForecastView::from_response(&response(&[100.0], &[])).unwrap_err();
        assert!(matches!(err, AppError::DegenerateResponse(_)));
    }

    #[test]
    fn zero_baseline_is_an_error() {
        let err = ForecastView::from_response(&response(&[5.0, 0.0], &[1.0])).unwrap_err();
        assert!(matches!(err, AppError::DegenerateResponse(_)));
    }

    #[test]
    fn misaligned_actual_series_is_an_error() {
        let mut body = response(&[100.0, 101.0], &[102.0]);
        body.actual_data.dates.pop();
        let err = ForecastView::from_response(&body).unwrap_err();
        assert!(matches!(err, AppError::DegenerateResponse(_)));
    }

    #[test]
    fn model_fit_is_placed_by_date() {
        let mut body = response(&[100.0, 102.0, 101.0], &[105.0]);
        body.historical_predictions = series(&["2024-01-02", "2024-01-03", "1999-12-31"], &[101.5, 100.5, 1.0]);

        let view = ForecastView::from_response(&body).unwrap();
        assert_eq!(view.model_fit, vec![None, Some(101.5), Some(100.5), None]);
    }

    #[test]
    fn value_range_optionally_includes_model_fit() {
        let mut body = response(&[100.0, 102.0], &[105.0]);
        body.historical_predictions = series(&["2024-01-01"], &[90.0]);

        let view = ForecastView::from_response(&body).unwrap();
        assert_eq!(view.value_range(false), Some((100.0, 105.0)));
        assert_eq!(view.value_range(true), Some((90.0, 105.0)));
    }

    #[test]
    fn flat_forecast_is_a_zero_gain() {
        let view = ForecastView::from_response(&response(&[100.0], &[100.0])).unwrap();
        assert!(view.headline.is_gain);
        assert_eq!(view.headline.signed_percent_label(), "+0.00%");
    }
}
