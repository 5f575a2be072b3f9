//! Body profile metrics captured at onboarding.

use crate::error::{Result, ScoreError};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Normal Weight")]
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyProfile {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub category: BmiCategory,
    pub bmi_score: u8,
}

impl BodyProfile {
    pub fn new(height_cm: f64, weight_kg: f64) -> Result<Self> {
        let bmi = bmi(height_cm, weight_kg)?;
        Ok(Self {
            height_cm,
            weight_kg,
            bmi,
            category: BmiCategory::classify(bmi),
            bmi_score: bmi_score(bmi),
        })
    }
}

pub fn bmi(height_cm: f64, weight_kg: f64) -> Result<f64> {
    for (name, value) in [("height_cm", height_cm), ("weight_kg", weight_kg)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ScoreError::InvalidInput(format!(
                "{name} must be a positive number (got {value})"
            )));
        }
    }
    let meters = height_cm / 100.0;
    Ok(weight_kg / (meters * meters))
}

/// 100 at a BMI of 22, four points off per unit of distance from it.
pub fn bmi_score(bmi: f64) -> u8 {
    ((25.0 - (bmi - 22.0).abs()) * 4.0).clamp(0.0, 100.0).round() as u8
}
