//! Regions Module
//!
//! Maps ranked symptom contributions onto body regions and derives a
//! discrete severity per region for the silhouette rendering layer.
//! This is the CORE STEP of the analysis, everything else is plumbing.
//!
//! ## Structure
//! - `types`: Core types (Region, Severity, RegionScores, etc.)
//! - `catalog`: Region layout and display metadata
//! - `rules`: Keyword tables and thresholds
//! - `mapper`: Feature name to region matching
//! - `aggregator`: Max-reduction scoring and the chest fallback
//! - `classifier`: Severity bucketing and pipeline entry points
//!
//! ## Usage
//! ```ignore
//! use crate::logic::regions::{classify, Region, Severity};
//!
//! let severities = classify(&contributions);
//! if severities.get(Region::Heart) >= Severity::Medium {
//!     println!("Heart region needs attention");
//! }
//! ```

pub mod aggregator;
pub mod catalog;
pub mod classifier;
pub mod mapper;
pub mod rules;
pub mod types;


// Re-export main types for convenience
pub use types::{Region, RegionAnalysis, RegionScores, RegionSeverities, Severity};

pub use catalog::{metadata, region_by_name, RegionMetadata, REGION_COUNT};

pub use rules::{
    KeywordRule, SeverityThresholds, FALLBACK_REGION, FALLBACK_SCORE, HIGH_THRESHOLD,
    KEYWORD_RULES, MEDIUM_THRESHOLD,
};

pub use classifier::{analyze, analyze_with_thresholds, classify, to_severity};
