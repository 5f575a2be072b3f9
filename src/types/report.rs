use crate::scoring::benchmarks::BenchmarkEntry;
use crate::scoring::catalog::TestDefinition;
use crate::types::assessment::Submission;
use crate::types::scoring::BenchmarkRow;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    #[serde(flatten)]
    pub submission: Submission,
    pub test_name: String,
    pub bracket: Option<String>,
    pub benchmark: Option<BenchmarkRow>,
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigSummary {
    pub brackets: Vec<String>,
    pub tests: usize,
    pub benchmark_rows: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkListing<'a> {
    pub test: &'a TestDefinition,
    pub rows: Vec<BenchmarkEntry<'a>>,
}
