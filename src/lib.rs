pub mod config;
pub mod error;
pub mod leaderboard;
pub mod profile;
pub mod report;
pub mod scoring;
pub mod types;
pub mod vision;

pub use crate::error::{Result, ScoreError};
pub use crate::scoring::{evaluate, score, Evaluation, ScoringModel};
pub use crate::types::scoring::{BenchmarkRow, Category, Direction, Grade, ScoreResult};
