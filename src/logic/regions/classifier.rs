//! Region Severity Classifier
//!
//! Buckets region scores into discrete severities and wires the full
//! pipeline together: contributions -> mapper -> aggregator -> severities.
//! Pure and synchronous, no state survives a call.

use crate::logic::explain::Contribution;

use super::aggregator;
use super::rules::{SeverityThresholds, HIGH_THRESHOLD, MEDIUM_THRESHOLD};
use super::types::{RegionAnalysis, RegionSeverities, Severity};

// ============================================================================
// BUCKETING
// ============================================================================

/// Map a region score to its severity using the fixed thresholds
///
/// Bounds are inclusive on the lower edge: exactly 30 is High, exactly
/// 15 is Medium, exactly 0 is None.
pub fn to_severity(score: f32) -> Severity {
    if score >= HIGH_THRESHOLD {
        Severity::High
    } else if score >= MEDIUM_THRESHOLD {
        Severity::Medium
    } else if score > 0.0 {
        Severity::Low
    } else {
        Severity::None
    }
}

fn to_severity_with(score: f32, thresholds: &SeverityThresholds) -> Severity {
    if score >= thresholds.high_min {
        Severity::High
    } else if score >= thresholds.medium_min {
        Severity::Medium
    } else if score > 0.0 {
        Severity::Low
    } else {
        Severity::None
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Full analysis: severities plus raw scores and the fallback flag
pub fn analyze(contributions: &[Contribution]) -> RegionAnalysis {
    analyze_with_thresholds(contributions, &SeverityThresholds::default())
}

/// Analysis with custom thresholds
pub fn analyze_with_thresholds(
    contributions: &[Contribution],
    thresholds: &SeverityThresholds,
) -> RegionAnalysis {
    let mut scores = aggregator::raw_scores(contributions);
    let fallback_applied = aggregator::apply_fallback(&mut scores, thresholds.fallback_score);

    let mut severities = RegionSeverities::new();
    for (region, score) in scores.iter() {
        severities.set(region, to_severity_with(score, thresholds));
    }

    RegionAnalysis {
        severities,
        scores,
        fallback_applied,
    }
}

/// Severity map only, for callers that do not need diagnostics
pub fn classify(contributions: &[Contribution]) -> RegionSeverities {
    analyze(contributions).severities
}

// ============================================================================
// TESTS
// ============================================================================
