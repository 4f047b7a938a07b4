pub mod messages;
pub mod session;

// Re-export key components
pub use messages::{PredictionOutcome, RequestTicket, UploadOutcome};
pub use session::{Completion, Session, UploadStatus};
