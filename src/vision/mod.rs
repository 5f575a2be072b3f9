//! Media analysis seam. Real pose or video inference plugs in behind
//! [`VisionAnalyzer`]; the crate only ships [`placeholder::PlaceholderAnalyzer`].

pub mod placeholder;

use crate::error::Result;
use crate::types::scoring::Grade;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaKind {
    Smash,
    PushUps,
    BodyMetrics,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisionRequest {
    pub kind: MediaKind,
    pub height_cm: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub name: String,
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisionAnalysis {
    pub kind: MediaKind,
    pub primary_metric: Metric,
    pub secondary_metrics: BTreeMap<String, f64>,
    pub technique: Option<Grade>,
}

pub trait VisionAnalyzer {
    fn analyze(&self, request: &VisionRequest) -> Result<VisionAnalysis>;
}

pub fn smash_technique(speed_kmh: f64) -> Grade {
    if speed_kmh > 160.0 {
        Grade::Excellent
    } else if speed_kmh > 130.0 {
        Grade::Good
    } else {
        Grade::NeedsImprovement
    }
}

pub fn form_technique(form_score: f64) -> Grade {
    if form_score > 80.0 {
        Grade::Excellent
    } else if form_score > 60.0 {
        Grade::Good
    } else {
        Grade::NeedsImprovement
    }
}

/// Symmetry and posture weighted with a fixed proportions baseline of 80.
pub fn body_metrics_score(symmetry: f64, posture: f64) -> u8 {
    (symmetry * 0.4 + posture * 0.3 + 80.0 * 0.3)
        .clamp(0.0, 100.0)
        .round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smash_technique_thresholds_are_exclusive() {
        assert_eq!(smash_technique(161.0), Grade::Excellent);
        assert_eq!(smash_technique(160.0), Grade::Good);
        assert_eq!(smash_technique(130.0), Grade::NeedsImprovement);
    }

    #[test]
    fn form_technique_thresholds_are_exclusive() {
        assert_eq!(form_technique(81.0), Grade::Excellent);
        assert_eq!(form_technique(80.0), Grade::Good);
        assert_eq!(form_technique(60.0), Grade::NeedsImprovement);
    }

    #[test]
    fn body_metrics_score_weights_components() {
        assert_eq!(body_metrics_score(91.0, 85.0), 86);
        assert_eq!(body_metrics_score(100.0, 100.0), 94);
    }
}
