use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "talentscore",
    version,
    about = "Benchmark-based sports talent assessment scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding talentscore.toml and .talentscore/local.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one test result against the benchmark table
    Score(ScoreCommand),
    /// List known tests
    Catalog(CatalogCommand),
    /// Show benchmark rows for a test
    Benchmark(BenchmarkCommand),
    /// Load and validate the layered configuration
    Validate(ValidateCommand),
    /// Rank scored submissions from a JSON file
    Leaderboard(LeaderboardCommand),
    /// Compute BMI and BMI score
    Bmi(BmiCommand),
    /// Run the media analyzer for a recorded assessment
    Analyze(AnalyzeCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MediaKindArg {
    Smash,
    PushUps,
    BodyMetrics,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub test_id: String,
    #[arg(allow_negative_numbers = true)]
    pub result: f64,
    #[arg(long)]
    pub age: u32,
    #[arg(long)]
    pub gender: String,
    #[arg(long, default_value = "anonymous")]
    pub user: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CatalogCommand {
    #[arg(long)]
    pub category: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct BenchmarkCommand {
    pub test_id: String,
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ValidateCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct LeaderboardCommand {
    pub file: PathBuf,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub test: Option<String>,
    #[arg(long, default_value_t = 50)]
    pub limit: usize,
    #[arg(long)]
    pub by_player: bool,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct BmiCommand {
    #[arg(long, allow_negative_numbers = true)]
    pub height_cm: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub weight_kg: f64,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    #[arg(value_enum)]
    pub kind: MediaKindArg,
    #[arg(long)]
    pub height_cm: Option<f64>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}
