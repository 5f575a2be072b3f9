use super::{
    body_metrics_score, form_technique, smash_technique, MediaKind, Metric, VisionAnalysis,
    VisionAnalyzer, VisionRequest,
};
use crate::error::{Result, ScoreError};
use std::collections::BTreeMap;

const SMASH_SPEED_KMH: f64 = 160.0;
const PUSH_UP_COUNT: f64 = 15.0;
const PUSH_UP_WINDOW_SECS: f64 = 30.0;
const PUSH_UP_FORM: f64 = 75.0;
const BODY_SYMMETRY: f64 = 91.0;
const POSTURE: f64 = 85.0;

/// Height share and mid-range allowance in cm for each body segment.
const SEGMENTS: [(&str, f64, f64); 8] = [
    ("head_height", 0.13, 0.0),
    ("shoulder_breadth", 0.23, 5.0),
    ("chest_width", 0.18, 4.0),
    ("waist_width", 0.15, 3.0),
    ("hip_width", 0.19, 3.5),
    ("arm_length", 0.44, 7.5),
    ("upper_leg_length", 0.24, 4.0),
    ("lower_leg_length", 0.26, 4.0),
];

/// Deterministic stand-in returning mid-range values. Does not read media.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAnalyzer;

impl VisionAnalyzer for PlaceholderAnalyzer {
    fn analyze(&self, request: &VisionRequest) -> Result<VisionAnalysis> {
        match request.kind {
            MediaKind::Smash => Ok(VisionAnalysis {
                kind: request.kind,
                primary_metric: metric("smash_speed", SMASH_SPEED_KMH, "km/h"),
                secondary_metrics: BTreeMap::from([
                    ("accuracy".to_string(), 85.0),
                    ("power_generation".to_string(), 87.5),
                    ("follow_through".to_string(), 82.5),
                ]),
                technique: Some(smash_technique(SMASH_SPEED_KMH)),
            }),
            MediaKind::PushUps => Ok(VisionAnalysis {
                kind: request.kind,
                primary_metric: metric("push_up_count", PUSH_UP_COUNT, "reps"),
                secondary_metrics: BTreeMap::from([
                    ("duration_secs".to_string(), PUSH_UP_WINDOW_SECS),
                    ("form_score".to_string(), PUSH_UP_FORM),
                ]),
                technique: Some(form_technique(PUSH_UP_FORM)),
            }),
            MediaKind::BodyMetrics => {
                let height = request
                    .height_cm
                    .filter(|height| height.is_finite() && *height > 0.0)
                    .ok_or_else(|| {
                        ScoreError::InvalidInput(
                            "body metrics analysis requires a positive height_cm".to_string(),
                        )
                    })?;
                let mut secondary = SEGMENTS
                    .iter()
                    .map(|(name, share, allowance)| {
                        (name.to_string(), (height * share + allowance).round())
                    })
                    .collect::<BTreeMap<_, _>>();
                secondary.insert("height_cm".to_string(), height);
                secondary.insert("body_symmetry".to_string(), BODY_SYMMETRY);
                secondary.insert("posture_score".to_string(), POSTURE);
                Ok(VisionAnalysis {
                    kind: request.kind,
                    primary_metric: metric(
                        "body_metrics_score",
                        f64::from(body_metrics_score(BODY_SYMMETRY, POSTURE)),
                        "points",
                    ),
                    secondary_metrics: secondary,
                    technique: None,
                })
            }
        }
    }
}

fn metric(name: &str, value: f64, unit: &str) -> Metric {
    Metric {
        name: name.to_string(),
        value,
        unit: unit.to_string(),
    }
}
