use thiserror::Error;

/// Error types surfaced to the user.
///
/// Every variant renders as the message shown in the error panel, so the
/// `Display` text is user-facing rather than diagnostic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Predict was requested before any file was accepted
    #[error("Please select a CSV file first")]
    NoFileSelected,

    /// The candidate failed the CSV extension/type check
    #[error("Please upload a CSV file ('{0}' is not a CSV file)")]
    InvalidFileType(String),

    /// A prediction is already outstanding
    #[error("A prediction is already in progress")]
    PredictionInFlight,

    /// An upload-only request is already outstanding
    #[error("An upload is already in progress")]
    UploadInFlight,

    /// The chosen file could not be read from disk
    #[error("Could not read file: {0}")]
    FileRead(String),

    /// Transport or service failure, already reduced to one message
    #[error("{0}")]
    Request(String),

    /// The response parsed but cannot be rendered (empty or misaligned series)
    #[error("Prediction data is incomplete: {0}")]
    DegenerateResponse(String),
}
