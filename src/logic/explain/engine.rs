//! Contribution Ranking
//!
//! Selects the strongest contributors before region analysis. The
//! backend conventionally sends its top 10; the same cut is applied
//! here before classification.

use super::types::Contribution;

/// Top `limit` contributors by importance, strongest first
pub fn top_contributors(contributions: &[Contribution], limit: usize) -> Vec<Contribution> {
    let mut ranked = contributions.to_vec();

    // Sort by importance DESC
    ranked.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked.truncate(limit);
    ranked
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_strongest_first() {
        let contributions = vec![
            Contribution::new("Leg_Pain", 10.0),
            Contribution::new("Heart_Rate_Variability", 35.0),
            Contribution::new("Muscle_Weakness", 20.0),
        ];

        let ranked = top_contributors(&contributions, 10);
        assert_eq!(ranked[0].feature, "Heart_Rate_Variability");
        assert_eq!(ranked[1].feature, "Muscle_Weakness");
        assert_eq!(ranked[2].feature, "Leg_Pain");
    }

    #[test]
    fn test_truncates_to_limit() {
        let contributions: Vec<Contribution> = (0..15)
            .map(|i| Contribution::new(&format!("feature_{}", i), i as f32))
            .collect();

        let ranked = top_contributors(&contributions, 10);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].importance, 14.0);
    }

    #[test]
    fn test_shorter_input_kept_whole() {
        let contributions = vec![Contribution::new("Headache", 12.0)];

        let ranked = top_contributors(&contributions, 10);
        assert_eq!(ranked.len(), 1);
    }
}
