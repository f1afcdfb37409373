//! Region Classification Rules & Thresholds
//!
//! Thresholds and keyword tables for region severity classification.
//! No classify logic here, only constants and config.

use serde::{Deserialize, Serialize};

use super::types::Region;

// ============================================================================
// THRESHOLDS (Constants - fixed at build time)
// ============================================================================

/// At or above this score = High
pub const HIGH_THRESHOLD: f32 = 30.0;

/// At or above this score = Medium (below HIGH_THRESHOLD)
pub const MEDIUM_THRESHOLD: f32 = 15.0;

/// Region highlighted when nothing matches, so the silhouette is never blank
pub const FALLBACK_REGION: Region = Region::Chest;

/// Neutral score forced onto the fallback region; lands in the Low bucket
pub const FALLBACK_SCORE: f32 = 5.0;

// ============================================================================
// KEYWORD RULES
// ============================================================================

/// Maps keyword substrings to the region they indicate
///
/// A rule matches when the lowercased feature name contains any of its
/// keywords. Rules are not exclusive, one feature can hit several regions.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub region: Region,
}

impl KeywordRule {
    /// Test against an already-lowercased feature name
    pub fn matches(&self, normalized_feature: &str) -> bool {
        self.keywords.iter().any(|k| normalized_feature.contains(k))
    }
}

/// Built-in keyword table
///
/// Keywords must stay lowercase. "gi " keeps its trailing space so it
/// matches the "GI " prefix of gastrointestinal features without firing
/// on every word containing "gi".
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["brain", "headache", "neuro", "mental"],
        region: Region::Head,
    },
    KeywordRule {
        keywords: &["heart", "cardio", "pulse", "tachy", "palpitation"],
        region: Region::Heart,
    },
    KeywordRule {
        keywords: &["lung", "resp", "cough", "breath", "dyspnea"],
        region: Region::Chest,
    },
    KeywordRule {
        keywords: &["stomach", "abdomen", "abdominal", "nausea", "vomit", "gi "],
        region: Region::Abdomen,
    },
    KeywordRule {
        keywords: &["muscle", "weakness", "fatigue", "myalgia"],
        region: Region::Muscles,
    },
    KeywordRule {
        keywords: &["leg", "foot", "feet", "knee"],
        region: Region::Legs,
    },
];

// ============================================================================
// CONFIGURABLE THRESHOLDS
// ============================================================================

/// Thresholds for severity bucketing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityThresholds {
    /// At or above this = High
    pub high_min: f32,
    /// At or above this = Medium
    pub medium_min: f32,
    /// Score forced onto the fallback region when nothing matches
    pub fallback_score: f32,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            high_min: HIGH_THRESHOLD,
            medium_min: MEDIUM_THRESHOLD,
            fallback_score: FALLBACK_SCORE,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_region_has_a_rule() {
        for region in Region::ALL {
            assert!(
                KEYWORD_RULES.iter().any(|r| r.region == region),
                "no keyword rule for {}",
                region
            );
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for rule in KEYWORD_RULES {
            for keyword in rule.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_rule_matches_substring() {
        let heart = KEYWORD_RULES
            .iter()
            .find(|r| r.region == Region::Heart)
            .unwrap();
        assert!(heart.matches("heart_rate_variability"));
        assert!(heart.matches("resting pulse"));
        assert!(!heart.matches("headache"));
    }
}
