use std::time::Duration;

use crate::domain::{PredictionResponse, SelectedFile, UploadResponse};
use crate::error::AppError;

/// Permission to issue one request, tagged with the session generation it belongs to.
#[derive(Debug, Clone)]
pub struct RequestTicket {
    pub generation: u64,
    pub file: SelectedFile,
}

/// What a prediction request hands back to the session.
#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    pub generation: u64,
    // Failure: the user-facing message, already reduced by the client
    pub result: Result<PredictionResponse, AppError>,
    pub elapsed: Duration,
}

/// What an upload-only request hands back to the session.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub generation: u64,
    pub result: Result<UploadResponse, AppError>,
}
