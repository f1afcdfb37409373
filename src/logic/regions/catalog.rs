//! Region Catalog - Centralized Region Definition
//!
//! **This file controls the region set shown on the body silhouette**
//!
//! The catalog is the single source of truth for region count, order, and
//! display metadata. The score and severity containers in `types.rs` are
//! indexed by this order, so changing it changes every map the core emits.

use serde::Serialize;

use super::types::Region;

// ============================================================================
// REGION LAYOUT (Authoritative source)
// ============================================================================

/// Total number of body regions
pub const REGION_COUNT: usize = 6;

/// Region identifiers in the exact order used by scores and severity maps
pub const REGION_LAYOUT: &[&str] = &[
    "head",    // 0: Head / Brain
    "heart",   // 1: Heart
    "chest",   // 2: Chest / Lungs
    "abdomen", // 3: Abdomen / Digestive
    "muscles", // 4: Muscles / Arms
    "legs",    // 5: Legs / Lower Limbs
];

// ============================================================================
// DISPLAY METADATA
// ============================================================================

/// Display metadata for one region, consumed by the rendering layer
#[derive(Debug, Clone, Serialize)]
pub struct RegionMetadata {
    pub label: &'static str,
    pub description: &'static str,
}

/// Metadata table, indexed by region order
const REGION_METADATA: [RegionMetadata; REGION_COUNT] = [
    RegionMetadata {
        label: "Head / Brain",
        description: "Headaches, cognitive and neurological symptoms.",
    },
    RegionMetadata {
        label: "Heart",
        description: "Cardiac rhythm, pulse, and circulation-related symptoms.",
    },
    RegionMetadata {
        label: "Chest / Lungs",
        description: "Breathing, cough, and lung-related findings.",
    },
    RegionMetadata {
        label: "Abdomen / Digestive",
        description: "Stomach, liver, gut, and other digestive symptoms.",
    },
    RegionMetadata {
        label: "Muscles / Arms",
        description: "Muscle strength, fatigue, and myalgia.",
    },
    RegionMetadata {
        label: "Legs / Lower Limbs",
        description: "Leg weakness, circulation, and gait-related symptoms.",
    },
];

/// Get display metadata for a region
pub fn metadata(region: Region) -> &'static RegionMetadata {
    &REGION_METADATA[region.index()]
}

/// Look up a region by its identifier string
pub fn region_by_name(name: &str) -> Option<Region> {
    Region::ALL.iter().copied().find(|r| r.as_str() == name)
}

// ============================================================================
// TESTS
// ============================================================================
