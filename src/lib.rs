//! RxCompass Core - Symptom Region Analysis
//!
//! Takes the ranked (feature, importance) contributors the prediction
//! backend returns for a patient and derives a severity per body region
//! for the silhouette rendering layer. The prediction model, HTTP
//! transport, and UI live in other components; this crate is the pure
//! analysis step between them.

pub mod api;
pub mod constants;
pub mod logic;

// Re-export the main entry points for convenience
pub use logic::explain::Contribution;
pub use logic::regions::{
    analyze, classify, Region, RegionAnalysis, RegionScores, RegionSeverities, Severity,
};
