use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::{API, ApiSettings};
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::selected_file::CSV_MIME;
use crate::domain::{ModelInfo, PredictionResponse, SelectedFile, UploadResponse};
use crate::utils::app_time::{format_duration_short, now};

/// Shown when neither the service nor the transport produced a usable message
pub const FALLBACK_ERROR_MESSAGE: &str =
    "Failed to make prediction. Please check your file and try again.";
/// Last-resort text for the model panel
pub const MODEL_INFO_FALLBACK_MESSAGE: &str = "Model information is unavailable.";

/// Error types for calls to the prediction service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network failure, TLS failure, timeout, body read failure
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response; `detail` is the service's own explanation when present
    #[error("Request failed with status code {status}")]
    Status { status: u16, detail: Option<String> },

    /// 2xx response whose body is not the expected JSON
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Reduce the error to the single message shown to the user.
    ///
    /// Priority: service `detail`, then the transport/HTTP text, then a fixed fallback.
    pub fn user_message(&self) -> String {
        self.user_message_or(FALLBACK_ERROR_MESSAGE)
    }

    /// Same priority as [`ApiError::user_message`] with a caller-chosen last resort.
    pub fn user_message_or(&self, fallback: &str) -> String {
        if let ApiError::Status {
            detail: Some(detail),
            ..
        } = self
        {
            return detail.clone();
        }

        let text = self.to_string();
        if text.trim().is_empty() {
            fallback.to_string()
        } else {
            text
        }
    }
}

/// Pull a human-readable `detail` out of an error body.
///
/// The service answers with `{"detail": "..."}`; request validation failures
/// carry a list of `{"msg": ...}` objects instead, which are joined.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?;

    let text = match detail {
        serde_json::Value::Null => return None,
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if msgs.is_empty() {
                detail.to_string()
            } else {
                msgs.join("; ")
            }
        }
        other => other.to_string(),
    };

    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Thin async client for the prediction service. Cheap to clone.
#[derive(Clone, Debug)]
pub struct PredictionClient {
    http: reqwest::Client,
    settings: ApiSettings,
}

impl PredictionClient {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            settings,
        })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// `POST {base}/predict` with the file as the single multipart part.
    pub async fn predict(&self, file: &SelectedFile) -> Result<PredictionResponse, ApiError> {
        let url = self.settings.endpoint(API.endpoints.predict);
        let form = file_form(file)?;
        log::debug!("POST request to: {} ({}, {} bytes)", url, file.name, file.size);
        send_json(self.http.post(&url).multipart(form), &url).await
    }

    /// `POST {base}/upload`; stores the file server-side without predicting.
    pub async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse, ApiError> {
        let url = self.settings.endpoint(API.endpoints.upload);
        let form = file_form(file)?;
        log::debug!("POST request to: {} ({}, {} bytes)", url, file.name, file.size);
        send_json(self.http.post(&url).multipart(form), &url).await
    }

    /// `GET {base}/model-info`
    pub async fn model_info(&self) -> Result<ModelInfo, ApiError> {
        let url = self.settings.endpoint(API.endpoints.model_info);
        log::debug!("GET request to: {}", url);
        send_json(self.http.get(&url), &url).await
    }
}

fn file_form(file: &SelectedFile) -> Result<Form, ApiError> {
    let mime = file.mime.as_deref().unwrap_or(CSV_MIME);
    let part = Part::bytes(file.bytes.to_vec())
        .file_name(file.name.clone())
        .mime_str(mime)?;
    Ok(Form::new().part(API.file_field, part))
}

async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    url: &str,
) -> Result<T, ApiError> {
    let started = now();

    let response = request.send().await.map_err(|e| {
        log::error!("{} - Request failed: {}", url, e);
        ApiError::from(e)
    })?;

    let status = response.status();
    let body = response.text().await?;
    log::debug!(
        "{} - {} in {}",
        url,
        status,
        format_duration_short(started.elapsed())
    );

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_http_traffic {
        let preview: String = body.chars().take(200).collect();
        log::info!("{} - {} bytes: {}", url, body.len(), preview);
    }

    if !status.is_success() {
        let detail = extract_detail(&body);
        log::warn!("{} - Non-OK response: {} {:?}", url, status, detail);
        return Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        let msg = format!("Failed to parse response: {}", e);
        log::error!("{} - {}", url, msg);
        ApiError::Decode(msg)
    })
}
