//! Prediction Response Types
//!
//! Serde model of the prediction backend's JSON response. Field names on
//! the wire are camelCase, matching the `/api/predict` endpoint.

use serde::{Deserialize, Serialize};

use crate::logic::explain::Contribution;

// ============================================================================
// WIRE TYPES
// ============================================================================

/// One patient's prediction with its ranked symptom contributors
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientPrediction {
    pub patient_id: i64,
    /// Predicted disease label
    pub prediction: String,
    /// Model confidence as a percentage
    pub confidence: f32,
    /// Top ranked contributors, conventionally 10 entries
    pub top_features: Vec<Contribution>,
}

/// Full response body for one uploaded dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub predictions: Vec<PatientPrediction>,
    pub total_patients: usize,
}

/// Error body the backend returns instead of predictions
#[derive(Debug, Clone, Deserialize)]
struct BackendError {
    error: String,
}

// ============================================================================
// PARSING
// ============================================================================

/// Decode a prediction response body
///
/// Backend failures arrive as `{"error": "..."}` with no predictions;
/// those surface as the error string so the caller can notify the user.
pub fn parse_prediction_response(body: &str) -> Result<PredictionResponse, String> {
    if let Ok(backend_error) = serde_json::from_str::<BackendError>(body) {
        return Err(backend_error.error);
    }

    serde_json::from_str(body).map_err(|e| format!("JSON error: {}", e))
}

// ============================================================================
// TESTS
// ============================================================================
