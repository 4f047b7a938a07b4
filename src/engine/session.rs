//! The single source of truth for one upload/predict cycle.
//!
//! All mutation goes through the transitions below; the UI only reads.

use std::sync::Arc;
use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{FileCandidate, SelectedFile, UploadResponse};
use crate::error::AppError;
use crate::models::ForecastView;

use super::messages::{PredictionOutcome, RequestTicket, UploadOutcome};

/// Result of handing a finished request back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The outcome belonged to the current request and was applied
    Applied,
    /// A newer user action superseded the request; the outcome was dropped
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Pending,
    Stored(UploadResponse),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct Session {
    file: Option<SelectedFile>,
    result: Option<Arc<ForecastView>>,
    error: Option<AppError>,
    upload: UploadStatus,
    /// Bumped by every select/clear and by every request start
    generation: u64,
    prediction_in_flight: Option<u64>,
    upload_in_flight: Option<u64>,
    last_elapsed: Option<Duration>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // --- READ ACCESS ---

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn result(&self) -> Option<&Arc<ForecastView>> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    pub fn upload_status(&self) -> &UploadStatus {
        &self.upload
    }

    pub fn is_predicting(&self) -> bool {
        self.prediction_in_flight.is_some()
    }

    pub fn is_uploading(&self) -> bool {
        self.upload_in_flight.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Round-trip time of the last applied prediction
    pub fn last_elapsed(&self) -> Option<Duration> {
        self.last_elapsed
    }

    // --- TRANSITIONS ---

    /// Validate and hold a new file, replacing any previous one.
    ///
    /// On rejection the session is left exactly as it was.
    pub fn select_file(&mut self, candidate: FileCandidate) -> Result<&SelectedFile, AppError> {
        let file = SelectedFile::try_from_candidate(candidate)?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Selected {} ({})", file.name, file.size_label());
        }

        self.reset_downstream();
        Ok(self.file.insert(file))
    }

    /// Drop the held file together with any result or error.
    pub fn clear_file(&mut self) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Cleared selected file");
        }

        self.file = None;
        self.reset_downstream();
    }

    /// predict-start. Hands out a ticket only when a request may actually be sent.
    pub fn begin_prediction(&mut self) -> Result<RequestTicket, AppError> {
        if self.prediction_in_flight.is_some() {
            return Err(AppError::PredictionInFlight);
        }

        let Some(file) = self.file.clone() else {
            self.error = Some(AppError::NoFileSelected);
            return Err(AppError::NoFileSelected);
        };

        self.error = None;
        self.generation += 1;
        self.prediction_in_flight = Some(self.generation);

        Ok(RequestTicket {
            generation: self.generation,
            file,
        })
    }

    /// predict-success / predict-failure.
    pub fn complete_prediction(&mut self, outcome: PredictionOutcome) -> Completion {
        if self.prediction_in_flight != Some(outcome.generation) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_stale_results {
                log::info!(
                    "Discarding stale prediction result (generation {}, current {})",
                    outcome.generation,
                    self.generation
                );
            }
            return Completion::Stale;
        }

        self.prediction_in_flight = None;
        self.last_elapsed = Some(outcome.elapsed);

        match outcome.result.and_then(|response| ForecastView::from_response(&response)) {
            Ok(view) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_forecast_summary {
                    log::info!(
                        "Forecast ready: {} points, predicted {:.2} ({}%)",
                        view.len(),
                        view.headline.predicted,
                        view.headline.percent_label()
                    );
                }
                self.result = Some(Arc::new(view));
                self.error = None;
            }
            Err(error) => {
                log::error!("Prediction error: {}", error);
                self.result = None;
                self.error = Some(error);
            }
        }

        Completion::Applied
    }

    /// Start an upload-only request for the held file.
    pub fn begin_upload(&mut self) -> Result<RequestTicket, AppError> {
        if self.upload_in_flight.is_some() {
            return Err(AppError::UploadInFlight);
        }
        let file = self.file.clone().ok_or(AppError::NoFileSelected)?;

        self.generation += 1;
        self.upload_in_flight = Some(self.generation);
        self.upload = UploadStatus::Pending;

        Ok(RequestTicket {
            generation: self.generation,
            file,
        })
    }

    pub fn complete_upload(&mut self, outcome: UploadOutcome) -> Completion {
        if self.upload_in_flight != Some(outcome.generation) {
            return Completion::Stale;
        }

        self.upload_in_flight = None;
        self.upload = match outcome.result {
            Ok(receipt) => UploadStatus::Stored(receipt),
            Err(error) => {
                log::warn!("Upload failed: {}", error);
                UploadStatus::Failed(error.to_string())
            }
        };
        Completion::Applied
    }

    /// Everything downstream of the file becomes invalid; outstanding requests turn stale.
    fn reset_downstream(&mut self) {
        self.result = None;
        self.error = None;
        self.upload = UploadStatus::Idle;
        self.generation += 1;
        self.prediction_in_flight = None;
        self.upload_in_flight = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PredictionMetadata, PredictionResponse, PredictionSeries};

    fn csv(name: &str) -> FileCandidate {
        FileCandidate::new(name, None, b"date,close,open,high,low,volume\n".to_vec())
    }

    fn sample_response(next: f64) -> PredictionResponse {
        PredictionResponse {
            actual_data: PredictionSeries {
                dates: vec!["2024-01-01".into(), "2024-01-02".into(), "2024-01-03".into()],
                values: vec![100.0, 102.0, 101.0],
            },
            historical_predictions: PredictionSeries::default(),
            future_predictions: PredictionSeries {
                dates: vec!["2024-01-04".into()],
                values: vec![next],
            },
            metadata: PredictionMetadata {
                total_input_records: 9,
                prediction_periods: 1,
                model_time_steps: 6,
            },
        }
    }

    fn success(ticket: &RequestTicket, next: f64) -> PredictionOutcome {
        PredictionOutcome {
            generation: ticket.generation,
            result: Ok(sample_response(next)),
            elapsed: Duration::from_millis(250),
        }
    }

    #[test]
    fn selecting_replaces_previous_file_and_clears_result() {
        let mut session = Session::new();
        session.select_file(csv("first.csv")).unwrap();
        let ticket = session.begin_prediction().unwrap();
        assert_eq!(session.complete_prediction(success(&ticket, 105.0)), Completion::Applied);
        assert!(session.result().is_some());

        session.select_file(csv("second.csv")).unwrap();
        assert_eq!(session.file().map(|f| f.name.as_str()), Some("second.csv"));
        assert!(session.result().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn rejected_file_leaves_state_untouched() {
        let mut session = Session::new();
        session.select_file(csv("keep.csv")).unwrap();
        let ticket = session.begin_prediction().unwrap();
        session.complete_prediction(success(&ticket, 105.0));
        let generation = session.generation();

        let err = session
            .select_file(FileCandidate::new("report.pdf", Some("application/pdf".into()), vec![1u8]))
            .unwrap_err();

        assert_eq!(err, AppError::InvalidFileType("report.pdf".into()));
        assert_eq!(session.file().map(|f| f.name.as_str()), Some("keep.csv"));
        assert!(session.result().is_some());
        assert_eq!(session.generation(), generation);
    }

    #[test]
    fn clear_always_resets_everything() {
        let mut session = Session::new();
        session.clear_file();
        assert!(session.file().is_none());

        session.select_file(csv("a.csv")).unwrap();
        let ticket = session.begin_prediction().unwrap();
        session.complete_prediction(PredictionOutcome {
            generation: ticket.generation,
            result: Err(AppError::Request("bad columns".into())),
            elapsed: Duration::ZERO,
        });
        assert!(session.error().is_some());

        session.clear_file();
        assert!(session.file().is_none());
        assert!(session.result().is_none());
        assert!(session.error().is_none());
        assert!(!session.is_predicting());
    }

    #[test]
    fn predict_without_file_issues_no_ticket() {
        let mut session = Session::new();
        let err = session.begin_prediction().unwrap_err();
        assert_eq!(err, AppError::NoFileSelected);
        assert_eq!(session.error(), Some(&AppError::NoFileSelected));
        assert!(!session.is_predicting());
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn second_predict_while_outstanding_is_rejected() {
        let mut session = Session::new();
        session.select_file(csv("a.csv")).unwrap();
        let first = session.begin_prediction().unwrap();
        assert!(session.is_predicting());

        assert_eq!(session.begin_prediction().unwrap_err(), AppError::PredictionInFlight);

        session.complete_prediction(success(&first, 105.0));
        assert!(!session.is_predicting());
        assert!(session.begin_prediction().is_ok());
    }

    #[test]
    fn result_of_superseded_request_is_discarded() {
        let mut session = Session::new();
        session.select_file(csv("old.csv")).unwrap();
        let old = session.begin_prediction().unwrap();

        session.select_file(csv("new.csv")).unwrap();
        let new = session.begin_prediction().unwrap();
        assert!(new.generation > old.generation);

        assert_eq!(session.complete_prediction(success(&old, 999.0)), Completion::Stale);
        assert!(session.result().is_none());
        assert!(session.is_predicting());

        assert_eq!(session.complete_prediction(success(&new, 105.0)), Completion::Applied);
        let view = session.result().unwrap();
        assert_eq!(view.headline.predicted, 105.0);
    }

    #[test]
    fn result_arriving_after_clear_is_discarded() {
        let mut session = Session::new();
        session.select_file(csv("a.csv")).unwrap();
        let ticket = session.begin_prediction().unwrap();
        session.clear_file();

        assert_eq!(session.complete_prediction(success(&ticket, 105.0)), Completion::Stale);
        assert!(session.result().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn degenerate_response_becomes_an_error() {
        let mut session = Session::new();
        session.select_file(csv("a.csv")).unwrap();
        let ticket = session.begin_prediction().unwrap();

        let mut response = sample_response(105.0);
        response.actual_data = PredictionSeries::default();
        session.complete_prediction(PredictionOutcome {
            generation: ticket.generation,
            result: Ok(response),
            elapsed: Duration::ZERO,
        });

        assert!(matches!(session.error(), Some(AppError::DegenerateResponse(_))));
        assert!(session.result().is_none());
    }

    #[test]
    fn same_file_twice_renders_identically() {
        let mut session = Session::new();
        session.select_file(csv("a.csv")).unwrap();

        let first = session.begin_prediction().unwrap();
        session.complete_prediction(success(&first, 105.0));
        let first_view = session.result().cloned().unwrap();

        let second = session.begin_prediction().unwrap();
        session.complete_prediction(success(&second, 105.0));
        let second_view = session.result().cloned().unwrap();

        assert_ne!(first.generation, second.generation);
        assert_eq!(*first_view, *second_view);
    }

    #[test]
    fn upload_receipt_is_tracked_separately() {
        let mut session = Session::new();
        assert_eq!(session.begin_upload().unwrap_err(), AppError::NoFileSelected);

        session.select_file(csv("a.csv")).unwrap();
        let ticket = session.begin_upload().unwrap();
        assert_eq!(session.upload_status(), &UploadStatus::Pending);

        let receipt = UploadResponse {
            message: "File uploaded successfully".into(),
            filename: "20240101_120000_a.csv".into(),
            filepath: "uploads/20240101_120000_a.csv".into(),
            size: 33,
        };
        session.complete_upload(UploadOutcome {
            generation: ticket.generation,
            result: Ok(receipt.clone()),
        });

        assert_eq!(session.upload_status(), &UploadStatus::Stored(receipt));
        assert!(session.error().is_none());
    }
}
