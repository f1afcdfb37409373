//! Region Analysis Types
//!
//! Core types for region severity classification.
//! No logic here, only data structures.

use serde::{Deserialize, Serialize};

use super::catalog::REGION_COUNT;

// ============================================================================
// REGION
// ============================================================================

/// Body regions highlighted on the silhouette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Head = 0,
    Heart = 1,
    Chest = 2,
    Abdomen = 3,
    Muscles = 4,
    Legs = 5,
}

impl Region {
    /// All regions in catalog order
    pub const ALL: [Region; REGION_COUNT] = [
        Region::Head,
        Region::Heart,
        Region::Chest,
        Region::Abdomen,
        Region::Muscles,
        Region::Legs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Head => "head",
            Region::Heart => "heart",
            Region::Chest => "chest",
            Region::Abdomen => "abdomen",
            Region::Muscles => "muscles",
            Region::Legs => "legs",
        }
    }

    /// Position in catalog order, used to index score/severity containers
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SEVERITY
// ============================================================================

/// Severity levels for region styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No matching contribution, region stays unhighlighted
    None = 0,
    /// Mildly affected
    Low = 1,
    /// Affected
    Medium = 2,
    /// Highly affected, needs attention in the report
    High = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::None => "#6b7280",   // Gray
            Severity::Low => "#eab308",    // Yellow
            Severity::Medium => "#f59e0b", // Orange
            Severity::High => "#ef4444",   // Red
        }
    }

    /// CSS class consumed by the silhouette renderer
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::None => "silhouette-region-none",
            Severity::Low => "silhouette-region-low",
            Severity::Medium => "silhouette-region-medium",
            Severity::High => "silhouette-region-high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// REGION SCORES
// ============================================================================

/// Numeric score per region, always fully populated
///
/// Values are in catalog order. Scores are non-negative once the
/// aggregator has run; use [`Region::index`] for direct access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionScores {
    pub values: [f32; REGION_COUNT],
}

impl RegionScores {
    /// Create a zeroed score map
    pub fn new() -> Self {
        Self {
            values: [0.0; REGION_COUNT],
        }
    }

    pub fn get(&self, region: Region) -> f32 {
        self.values[region.index()]
    }

    pub fn set(&mut self, region: Region, value: f32) {
        self.values[region.index()] = value;
    }

    /// Merge a contribution into a region, keeping the maximum
    pub fn raise(&mut self, region: Region, value: f32) {
        let current = self.values[region.index()];
        self.values[region.index()] = current.max(value);
    }

    pub fn is_all_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }

    /// Iterate (region, score) pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Region, f32)> + '_ {
        Region::ALL.iter().map(move |&r| (r, self.values[r.index()]))
    }
}

impl Default for RegionScores {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// REGION SEVERITIES
// ============================================================================

/// Discrete severity per region, always fully populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSeverities {
    pub values: [Severity; REGION_COUNT],
}

impl RegionSeverities {
    /// Create a map with every region at [`Severity::None`]
    pub fn new() -> Self {
        Self {
            values: [Severity::None; REGION_COUNT],
        }
    }

    pub fn get(&self, region: Region) -> Severity {
        self.values[region.index()]
    }

    pub fn set(&mut self, region: Region, severity: Severity) {
        self.values[region.index()] = severity;
    }

    /// Iterate (region, severity) pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Region, Severity)> + '_ {
        Region::ALL.iter().map(move |&r| (r, self.values[r.index()]))
    }

    /// Count of regions above [`Severity::None`]
    pub fn highlighted_count(&self) -> usize {
        self.values.iter().filter(|&&s| s > Severity::None).count()
    }
}

impl Default for RegionSeverities {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ANALYSIS RESULT
// ============================================================================

/// Result of a full region analysis
///
/// Carries the raw scores next to the bucketed severities so the
/// rendering layer can show them in tooltips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionAnalysis {
    pub severities: RegionSeverities,
    pub scores: RegionScores,
    /// True when no contribution matched any rule and the neutral
    /// chest highlight was forced
    pub fallback_applied: bool,
}
