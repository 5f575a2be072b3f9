pub mod benchmarks;
pub mod brackets;
pub mod catalog;
pub mod curve;

use crate::error::{Result, ScoreError};
use crate::types::config::ScoringConfig;
use crate::types::scoring::{BenchmarkRow, ScoreResult};
use benchmarks::BenchmarkRepository;
use brackets::AgeBrackets;
use catalog::TestCatalog;
use serde::Serialize;
use tracing::{debug, warn};

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;

/// Validated, immutable scoring configuration shared by reference.
#[derive(Debug, Clone)]
pub struct ScoringModel {
    pub brackets: AgeBrackets,
    pub catalog: TestCatalog,
    pub benchmarks: BenchmarkRepository,
}

impl ScoringModel {
    pub fn from_config(config: &ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            brackets: AgeBrackets::from_config(&config.brackets),
            catalog: TestCatalog::from_config(&config.catalog),
            benchmarks: BenchmarkRepository::from_table(&config.benchmarks),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    #[serde(flatten)]
    pub result: ScoreResult,
    pub bracket: Option<String>,
    pub benchmark: Option<BenchmarkRow>,
}

impl Evaluation {
    fn neutral(bracket: Option<String>) -> Self {
        Self {
            result: ScoreResult::NEUTRAL,
            bracket,
            benchmark: None,
        }
    }

    /// True when no benchmark applied and the neutral result was returned.
    pub fn is_fallback(&self) -> bool {
        self.benchmark.is_none()
    }
}

pub fn score(
    model: &ScoringModel,
    test_id: &str,
    raw: f64,
    age: u32,
    gender: &str,
) -> Result<ScoreResult> {
    evaluate(model, test_id, raw, age, gender).map(|evaluation| evaluation.result)
}

/// Scores one raw result against the benchmark row for the subject's gender
/// and age bracket.
///
/// Unknown tests and missing benchmark rows are not errors: they produce
/// [`ScoreResult::NEUTRAL`]. Only malformed numeric input is rejected.
pub fn evaluate(
    model: &ScoringModel,
    test_id: &str,
    raw: f64,
    age: u32,
    gender: &str,
) -> Result<Evaluation> {
    validate_input(raw, age)?;

    let Some(bracket) = model.brackets.bracket_for(age) else {
        return Ok(Evaluation::neutral(None));
    };
    let label = Some(bracket.label.clone());

    let Some(test) = model.catalog.find(test_id) else {
        debug!(test_id, "test not in catalog, using neutral result");
        return Ok(Evaluation::neutral(label));
    };

    let Some(row) = model.benchmarks.lookup(test_id, gender, &bracket.label) else {
        debug!(
            test_id,
            gender,
            bracket = %bracket.label,
            "no benchmark row, using neutral result"
        );
        return Ok(Evaluation::neutral(label));
    };

    let result = curve::apply(test.direction, row, raw);
    debug!(test_id, raw, score = result.score, grade = %result.grade, "scored result");
    Ok(Evaluation {
        result,
        bracket: label,
        benchmark: Some(*row),
    })
}

fn validate_input(raw: f64, age: u32) -> Result<()> {
    let problem = if !raw.is_finite() {
        format!("result must be a finite number (got {raw})")
    } else if raw < 0.0 {
        format!("result must not be negative (got {raw})")
    } else if !(MIN_AGE..=MAX_AGE).contains(&age) {
        format!("age must be between {MIN_AGE} and {MAX_AGE} (got {age})")
    } else {
        return Ok(());
    };
    warn!(raw, age, "rejected input: {problem}");
    Err(ScoreError::InvalidInput(problem))
}
