use std::future::Future;

use eframe::egui;
use poll_promise::Promise;

use crate::api::MODEL_INFO_FALLBACK_MESSAGE;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::engine::{Completion, PredictionOutcome, UploadOutcome};
use crate::error::AppError;
use crate::ui::app::{ForecastApp, ModelInfoState};
use crate::utils::app_time::{format_duration_short, now};

// Natively the future runs on the tokio runtime entered in `main`;
// in the browser it is driven by the JS event loop.
#[cfg(not(target_arch = "wasm32"))]
fn spawn_request<T, F>(future: F) -> Promise<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    Promise::spawn_async(future)
}

#[cfg(target_arch = "wasm32")]
fn spawn_request<T, F>(future: F) -> Promise<T>
where
    T: Send + 'static,
    F: Future<Output = T> + 'static,
{
    Promise::spawn_local(future)
}

/// Take a finished value out of `slot`, leaving a pending promise in place.
fn take_ready<T: Send + 'static>(slot: &mut Option<Promise<T>>, ctx: &egui::Context) -> Option<T> {
    let promise = slot.take()?;
    match promise.try_take() {
        Ok(value) => Some(value),
        Err(pending) => {
            *slot = Some(pending);
            ctx.request_repaint();
            None
        }
    }
}

impl ForecastApp {
    pub(super) fn start_prediction(&mut self) {
        let ticket = match self.session.begin_prediction() {
            Ok(ticket) => ticket,
            Err(AppError::PredictionInFlight) => {
                log::debug!("Ignoring predict request: one is already running");
                return;
            }
            Err(e) => {
                log::warn!("Prediction not started: {}", e);
                return;
            }
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Predict requested for {} (generation {})", ticket.file.name, ticket.generation);
        }

        let client = self.client.clone();
        self.prediction_promise = Some(spawn_request(async move {
            let started = now();
            let result = client
                .predict(&ticket.file)
                .await
                .map_err(|e| AppError::Request(e.user_message()));
            PredictionOutcome {
                generation: ticket.generation,
                result,
                elapsed: started.elapsed(),
            }
        }));
    }

    pub(super) fn poll_prediction(&mut self, ctx: &egui::Context) {
        let Some(outcome) = take_ready(&mut self.prediction_promise, ctx) else {
            return;
        };

        let elapsed = outcome.elapsed;
        if self.session.complete_prediction(outcome) == Completion::Applied {
            self.plot_view.clear_cache();
            if let Some(view) = self.session.result() {
                log::info!(
                    "Prediction ready in {}: {} -> {:.2}",
                    format_duration_short(elapsed),
                    view.headline.prediction_date,
                    view.headline.predicted
                );
            }
        }
    }

    pub(super) fn start_upload(&mut self) {
        let ticket = match self.session.begin_upload() {
            Ok(ticket) => ticket,
            Err(e) => {
                log::warn!("Upload not started: {}", e);
                return;
            }
        };

        let client = self.client.clone();
        self.upload_promise = Some(spawn_request(async move {
            let result = client
                .upload(&ticket.file)
                .await
                .map_err(|e| AppError::Request(e.user_message()));
            UploadOutcome {
                generation: ticket.generation,
                result,
            }
        }));
    }

    pub(super) fn poll_upload(&mut self, ctx: &egui::Context) {
        let Some(outcome) = take_ready(&mut self.upload_promise, ctx) else {
            return;
        };
        if self.session.complete_upload(outcome) == Completion::Stale {
            log::debug!("Discarded upload confirmation for a file no longer held");
        }
    }

    pub(super) fn start_model_info_fetch(&mut self) {
        if self.model_info_promise.is_some() {
            return;
        }
        self.model_info = ModelInfoState::Loading;

        let client = self.client.clone();
        self.model_info_promise = Some(spawn_request(async move {
            client
                .model_info()
                .await
                .map_err(|e| e.user_message_or(MODEL_INFO_FALLBACK_MESSAGE))
        }));
    }

    pub(super) fn poll_model_info(&mut self, ctx: &egui::Context) {
        let Some(result) = take_ready(&mut self.model_info_promise, ctx) else {
            return;
        };
        self.model_info = match result {
            Ok(info) => {
                log::info!("Model: {} ({} time steps)", info.model, info.time_steps);
                ModelInfoState::Loaded(info)
            }
            Err(message) => {
                log::warn!("Could not load model info: {}", message);
                ModelInfoState::Failed(message)
            }
        };
    }
}
