//! API Module - Surface for the Rendering Layer
//!
//! Structure:
//! - types.rs: Wire types for the prediction backend response
//! - views.rs: Render-facing region views and patient reports
//!
//! Usage:
//! - `api::parse_prediction_response(body)` - Decode a backend response
//! - `api::analyze_response(&response)` - Build per-patient region reports

pub mod types;
pub mod views;

// Re-export the surface the front-end bridge consumes
pub use types::{parse_prediction_response, PatientPrediction, PredictionResponse};
pub use views::{analyze_patient, analyze_response, region_views, PatientRegionReport, RegionView};
