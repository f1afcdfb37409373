//! Logic Module - Analysis Engines
//!
//! - `explain` - Contribution handling (ranked symptom importances)
//! - `regions` - Region mapping and severity classification

pub mod explain;
pub mod regions;
