//! Render-Facing Views
//!
//! Builds the region rows and patient reports the silhouette and report
//! components consume. Styling hints (color, css class) are resolved
//! here, one place for severity semantics.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::types::{PatientPrediction, PredictionResponse};
use crate::constants;
use crate::logic::explain;
use crate::logic::regions::{self, Region, RegionAnalysis, Severity};

// ============================================================================
// VIEW STRUCTURES
// ============================================================================

/// One region row for the silhouette and its tooltip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionView {
    pub region: Region,
    pub label: String,
    pub description: String,
    pub severity: Severity,
    /// Raw aggregated score, for tooltips and diagnostics
    pub score: f32,
    pub color: String,
    pub css_class: String,
}

/// Per-patient region report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRegionReport {
    pub patient_id: i64,
    pub prediction: String,
    pub confidence: f32,
    pub regions: Vec<RegionView>,
    pub fallback_applied: bool,
    pub analyzed_at: String,
}

// ============================================================================
// VIEW BUILDERS
// ============================================================================

/// Region rows in catalog order for one analysis
pub fn region_views(analysis: &RegionAnalysis) -> Vec<RegionView> {
    Region::ALL
        .iter()
        .map(|&region| {
            let meta = regions::metadata(region);
            let severity = analysis.severities.get(region);
            RegionView {
                region,
                label: meta.label.to_string(),
                description: meta.description.to_string(),
                severity,
                score: analysis.scores.get(region),
                color: severity.color().to_string(),
                css_class: severity.css_class().to_string(),
            }
        })
        .collect()
}

/// Run the region analysis for one patient and package it for rendering
pub fn analyze_patient(patient: &PatientPrediction) -> PatientRegionReport {
    let ranked = explain::top_contributors(&patient.top_features, constants::get_top_contributors());
    let analysis = regions::analyze(&ranked);

    log::debug!(
        "Patient {}: {} region(s) highlighted{}",
        patient.patient_id,
        analysis.severities.highlighted_count(),
        if analysis.fallback_applied {
            " (fallback)"
        } else {
            ""
        }
    );

    PatientRegionReport {
        patient_id: patient.patient_id,
        prediction: patient.prediction.clone(),
        confidence: patient.confidence,
        regions: region_views(&analysis),
        fallback_applied: analysis.fallback_applied,
        analyzed_at: Utc::now().to_rfc3339(),
    }
}

/// Reports for every patient in a response
pub fn analyze_response(response: &PredictionResponse) -> Vec<PatientRegionReport> {
    response.predictions.iter().map(analyze_patient).collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::explain::Contribution;

    fn sample_patient() -> PatientPrediction {
        PatientPrediction {
            patient_id: 7,
            prediction: "Arrhythmia".to_string(),
            confidence: 92.4,
            top_features: vec![
                Contribution::new("Heart_Rate_Variability", 35.0),
                Contribution::new("Muscle_Weakness", 20.0),
                Contribution::new("Leg_Pain", 10.0),
            ],
        }
    }

    #[test]
    fn test_report_covers_all_regions() {
        let report = analyze_patient(&sample_patient());

        assert_eq!(report.regions.len(), regions::REGION_COUNT);
        for (view, region) in report.regions.iter().zip(Region::ALL) {
            assert_eq!(view.region, region);
        }
    }

    #[test]
    fn test_report_styling_matches_severity() {
        let report = analyze_patient(&sample_patient());

        let heart = report
            .regions
            .iter()
            .find(|v| v.region == Region::Heart)
            .unwrap();
        assert_eq!(heart.severity, Severity::High);
        assert_eq!(heart.score, 35.0);
        assert_eq!(heart.color, "#ef4444");
        assert_eq!(heart.css_class, "silhouette-region-high");
        assert_eq!(heart.label, "Heart");
    }

    #[test]
    fn test_report_carries_patient_fields() {
        let report = analyze_patient(&sample_patient());

        assert_eq!(report.patient_id, 7);
        assert_eq!(report.prediction, "Arrhythmia");
        assert_eq!(report.confidence, 92.4);
        assert!(!report.fallback_applied);
        assert!(!report.analyzed_at.is_empty());
    }

    #[test]
    fn test_unrecognized_features_fall_back() {
        let patient = PatientPrediction {
            patient_id: 2,
            prediction: "Diabetes".to_string(),
            confidence: 88.0,
            top_features: vec![Contribution::new("Blood_Glucose_Level", 64.0)],
        };

        let report = analyze_patient(&patient);
        assert!(report.fallback_applied);

        let chest = report
            .regions
            .iter()
            .find(|v| v.region == Region::Chest)
            .unwrap();
        assert_eq!(chest.severity, Severity::Low);
        assert_eq!(chest.css_class, "silhouette-region-low");
    }

    #[test]
    fn test_analyze_response_one_report_per_patient() {
        let response = PredictionResponse {
            predictions: vec![sample_patient(), sample_patient()],
            total_patients: 2,
        };

        let reports = analyze_response(&response);
        assert_eq!(reports.len(), 2);
    }
}
