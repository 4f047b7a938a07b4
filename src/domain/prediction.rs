//! Wire types exchanged with the prediction service.

use serde::{Deserialize, Serialize};

/// Ordered (date, value) pairs, stored as two index-aligned arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionSeries {
    pub dates: Vec<String>,
    pub values: Vec<f64>,
}

impl PredictionSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_aligned(&self) -> bool {
        self.dates.len() == self.values.len()
    }

    pub fn last_value(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn first_value(&self) -> Option<f64> {
        self.values.first().copied()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionMetadata {
    pub total_input_records: u64,
    pub prediction_periods: u64,
    /// Length of the model's historical context window
    pub model_time_steps: u64,
}

/// Body of a successful `/predict` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub actual_data: PredictionSeries,
    pub historical_predictions: PredictionSeries,
    pub future_predictions: PredictionSeries,
    pub metadata: PredictionMetadata,
}

/// Body of a successful `/upload` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
    pub filepath: String,
    pub size: u64,
}

/// Body of `/model-info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model: String,
    pub time_steps: u64,
    pub input_dims: u64,
    pub lstm_units: u64,
    pub train_min: f64,
    pub train_max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_service_payload() {
        let body = r#"{
            "actual_data": {"dates": ["2024-01-02 00:00:00", "2024-01-03 00:00:00"], "values": [100.0, 101.5]},
            "historical_predictions": {"dates": ["2024-01-02 00:00:00", "2024-01-03 00:00:00"], "values": [99.8, 101.1]},
            "future_predictions": {"dates": ["2024-01-04"], "values": [102.25]},
            "metadata": {"total_input_records": 8, "prediction_periods": 1, "model_time_steps": 6}
        }"#;

        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.actual_data.len(), 2);
        assert!(response.actual_data.is_aligned());
        assert_eq!(response.future_predictions.first_value(), Some(102.25));
        assert_eq!(response.metadata.model_time_steps, 6);
    }

    #[test]
    fn decodes_model_info() {
        let body = r#"{"model": "Attention-Based CNN-LSTM", "time_steps": 6, "input_dims": 6,
                       "lstm_units": 64, "train_min": 2.1, "train_max": 190.4}"#;
        let info: ModelInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.time_steps, 6);
        assert_eq!(info.lstm_units, 64);
    }
}
