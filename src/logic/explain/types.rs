//! Contribution Types
//!
//! One (feature, importance) pair from the prediction explanation.

use serde::{Deserialize, Serialize};

/// One ranked symptom contributor returned by the prediction backend
///
/// `importance` is a percentage in [0, 100] by convention, but the
/// analysis tolerates values outside that range rather than trusting the
/// wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub feature: String,
    pub importance: f32,
}

impl Contribution {
    pub fn new(feature: &str, importance: f32) -> Self {
        Self {
            feature: feature.to_string(),
            importance,
        }
    }
}
