// HTTP access to the remote prediction service
pub mod client;

pub use client::{
    ApiError, FALLBACK_ERROR_MESSAGE, MODEL_INFO_FALLBACK_MESSAGE, PredictionClient, extract_detail,
};
