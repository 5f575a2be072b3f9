use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Strength,
    Endurance,
    Agility,
    Reflexes,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Strength,
        Category::Endurance,
        Category::Agility,
        Category::Reflexes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Strength => "strength",
            Category::Endurance => "endurance",
            Category::Agility => "agility",
            Category::Reflexes => "reflexes",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way a raw result improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "higher")]
    HigherIsBetter,
    #[serde(rename = "lower")]
    LowerIsBetter,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::HigherIsBetter => "higher",
            Direction::LowerIsBetter => "lower",
        }
    }

    /// True when `a` is a strictly better raw result than `b`.
    pub fn is_better(&self, a: f64, b: f64) -> bool {
        match self {
            Direction::HigherIsBetter => a > b,
            Direction::LowerIsBetter => a < b,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::Average => "Average",
            Grade::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Fixed percentile for each grade tier. Not derived from a population
    /// distribution.
    pub fn tier_percentile(&self) -> f64 {
        match self {
            Grade::Excellent => 95.0,
            Grade::Good => 80.0,
            Grade::Average => 60.0,
            Grade::NeedsImprovement => 30.0,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reference thresholds for one (test, gender, age bracket) combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
    pub poor: f64,
}

impl BenchmarkRow {
    pub fn thresholds(&self) -> [f64; 4] {
        [self.excellent, self.good, self.average, self.poor]
    }

    /// Each threshold must be strictly better than the next one.
    pub fn is_ordered(&self, direction: Direction) -> bool {
        self.thresholds()
            .windows(2)
            .all(|pair| direction.is_better(pair[0], pair[1]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub percentile: u8,
    pub grade: Grade,
}

impl ScoreResult {
    /// Returned when no benchmark applies. Not a measured average.
    pub const NEUTRAL: ScoreResult = ScoreResult {
        score: 50,
        percentile: 50,
        grade: Grade::Average,
    };

    /// Clamps both values to `[0, 100]` and rounds to the nearest integer.
    pub fn from_raw(score: f64, percentile: f64, grade: Grade) -> Self {
        Self {
            score: to_unit_interval(score),
            percentile: to_unit_interval(percentile),
            grade,
        }
    }
}

fn to_unit_interval(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 100.0).round() as u8
}
