// Domain types and value objects
pub mod prediction;
pub mod selected_file;

// Re-export commonly used types
pub use prediction::{ModelInfo, PredictionMetadata, PredictionResponse, PredictionSeries, UploadResponse};
pub use selected_file::{FileCandidate, SelectedFile};
