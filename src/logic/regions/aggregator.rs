//! Severity Aggregator
//!
//! Reduces the full contribution list into one numeric score per region.
//! Per region the score is the maximum matching importance, not a sum:
//! one dominant symptom drives the highlight even when minor ones map to
//! the same region.

use crate::logic::explain::Contribution;

use super::mapper;
use super::rules::{FALLBACK_REGION, FALLBACK_SCORE};
use super::types::RegionScores;

/// Aggregate contributions into region scores without the fallback
///
/// Importances below zero are clipped to 0 before merging (NaN degrades
/// to 0 through the same clip). Values above 100 pass through unchanged,
/// only the thresholds matter downstream.
pub fn raw_scores(contributions: &[Contribution]) -> RegionScores {
    let mut scores = RegionScores::new();

    for contribution in contributions {
        let importance = contribution.importance.max(0.0);
        for region in mapper::regions_for(&contribution.feature) {
            scores.raise(region, importance);
        }
    }

    scores
}

/// Force the neutral chest highlight when every region scored 0
///
/// Returns true when the fallback fired. Suppressed as soon as any
/// region holds a nonzero score, however small.
pub fn apply_fallback(scores: &mut RegionScores, fallback_score: f32) -> bool {
    if scores.is_all_zero() {
        scores.set(FALLBACK_REGION, fallback_score);
        true
    } else {
        false
    }
}

/// Aggregate contributions into region scores, fallback included
pub fn aggregate(contributions: &[Contribution]) -> RegionScores {
    let mut scores = raw_scores(contributions);
    apply_fallback(&mut scores, FALLBACK_SCORE);
    scores
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::regions::types::Region;

    #[test]
    fn test_max_reduction_not_sum() {
        let contributions = vec![
            Contribution::new("heart_rate", 10.0),
            Contribution::new("heart_palpitation", 35.0),
        ];

        let scores = aggregate(&contributions);
        assert_eq!(scores.get(Region::Heart), 35.0);
    }

    #[test]
    fn test_negative_importance_clipped() {
        let contributions = vec![Contribution::new("Headache", -5.0)];

        let scores = raw_scores(&contributions);
        assert_eq!(scores.get(Region::Head), 0.0);
    }

    #[test]
    fn test_nan_importance_degrades_to_zero() {
        let contributions = vec![Contribution::new("Headache", f32::NAN)];

        let scores = raw_scores(&contributions);
        assert_eq!(scores.get(Region::Head), 0.0);
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let contributions = vec![Contribution::new("Blood_Glucose_Level", 80.0)];

        let mut scores = raw_scores(&contributions);
        assert!(scores.is_all_zero());

        let applied = apply_fallback(&mut scores, FALLBACK_SCORE);
        assert!(applied);
        assert_eq!(scores.get(Region::Chest), FALLBACK_SCORE);
        for (region, score) in scores.iter() {
            if region != Region::Chest {
                assert_eq!(score, 0.0);
            }
        }
    }

    #[test]
    fn test_fallback_suppressed_by_any_nonzero_score() {
        let contributions = vec![
            Contribution::new("Blood_Glucose_Level", 80.0),
            Contribution::new("Knee_Stiffness", 0.1),
        ];

        let scores = aggregate(&contributions);
        assert_eq!(scores.get(Region::Chest), 0.0);
        assert!((scores.get(Region::Legs) - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_multi_region_contribution_scores_both() {
        let contributions = vec![Contribution::new("Leg_Muscle_Cramps", 22.0)];

        let scores = aggregate(&contributions);
        assert_eq!(scores.get(Region::Legs), 22.0);
        assert_eq!(scores.get(Region::Muscles), 22.0);
    }
}
