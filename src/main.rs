mod cli;

use chrono::Utc;
use clap::Parser;
use std::path::Path;
use talentscore::config;
use talentscore::error::ScoreError;
use talentscore::leaderboard::{self, LeaderboardFilter};
use talentscore::profile::BodyProfile;
use talentscore::report::{self, md, OutputFormat};
use talentscore::scoring::{self, catalog::TestDefinition};
use talentscore::types::assessment::Submission;
use talentscore::types::report::{BenchmarkListing, ConfigSummary, ScoreReport};
use talentscore::types::scoring::Category;
use talentscore::vision::placeholder::PlaceholderAnalyzer;
use talentscore::vision::{MediaKind, VisionAnalyzer, VisionRequest};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn parse_category(value: &str) -> Result<Category, ScoreError> {
    Category::parse(value).ok_or_else(|| ScoreError::UnknownCategory(value.to_string()))
}

fn read_submissions(path: &Path) -> Result<Vec<Submission>, ScoreError> {
    if !path.exists() {
        return Err(ScoreError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let submissions: Vec<Submission> = serde_json::from_str(&content)?;
    info!(count = submissions.len(), path = %path.display(), "loaded submissions");
    Ok(submissions)
}

fn run(cli: cli::Cli) -> Result<i32, ScoreError> {
    match cli.command {
        cli::Commands::Score(cmd) => {
            let model = config::load_model(&cli.config_dir)?;
            let test = model.catalog.require(&cmd.test_id)?;
            let evaluation =
                scoring::evaluate(&model, &test.id, cmd.result, cmd.age, &cmd.gender)?;
            let fallback = evaluation.is_fallback();

            let report = ScoreReport {
                submission: Submission {
                    user_id: cmd.user.clone(),
                    display_name: cmd.name.clone(),
                    category: test.category,
                    test_id: test.id.clone(),
                    result: cmd.result,
                    unit: test.unit.clone(),
                    score: evaluation.result.score,
                    percentile: evaluation.result.percentile,
                    grade: evaluation.result.grade,
                    recorded_at: Utc::now(),
                },
                test_name: test.name.clone(),
                bracket: evaluation.bracket,
                benchmark: evaluation.benchmark,
                fallback,
            };
            let rendered = report::render(&report, output_format(cmd.format), md::score_report)?;
            println!("{rendered}");

            if fallback {
                warn!(
                    "no benchmark for {} ({}, age {}); neutral score reported",
                    test.id, cmd.gender, cmd.age
                );
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Catalog(cmd) => {
            let model = config::load_model(&cli.config_dir)?;
            let tests: Vec<TestDefinition> = match cmd.category.as_deref() {
                Some(category) => {
                    let category = parse_category(category)?;
                    model.catalog.list_by_category(category).cloned().collect()
                }
                None => model.catalog.iter().cloned().collect(),
            };
            let rendered = report::render(tests.as_slice(), output_format(cmd.format), md::catalog)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Benchmark(cmd) => {
            let model = config::load_model(&cli.config_dir)?;
            let test = model.catalog.require(&cmd.test_id)?;
            let listing = BenchmarkListing {
                test,
                rows: model
                    .benchmarks
                    .rows_matching(&test.id, cmd.gender.as_deref()),
            };
            let rendered = report::render(&listing, output_format(cmd.format), md::benchmarks)?;
            println!("{rendered}");

            if listing.rows.is_empty() {
                warn!("no benchmark rows defined for {}", test.id);
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Validate(cmd) => {
            let model = config::load_model(&cli.config_dir)?;
            let summary = ConfigSummary {
                brackets: model
                    .brackets
                    .iter()
                    .map(|bracket| bracket.label.clone())
                    .collect(),
                tests: model.catalog.len(),
                benchmark_rows: model.benchmarks.row_count(),
            };
            let rendered =
                report::render(&summary, output_format(cmd.format), md::config_summary)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Leaderboard(cmd) => {
            let submissions = read_submissions(&cmd.file)?;
            let filter = LeaderboardFilter {
                category: cmd.category.as_deref().map(parse_category).transpose()?,
                test_id: cmd.test.clone(),
                limit: cmd.limit,
            };
            let format = output_format(cmd.format);

            let empty = if cmd.by_player {
                let selected = submissions
                    .into_iter()
                    .filter(|submission| filter.matches(submission))
                    .collect::<Vec<_>>();
                let mut summaries = leaderboard::player_summaries(&selected);
                summaries.truncate(filter.limit);
                println!(
                    "{}",
                    report::render(summaries.as_slice(), format, md::player_summaries)?
                );
                summaries.is_empty()
            } else {
                let entries = leaderboard::leaderboard(&submissions, &filter);
                println!(
                    "{}",
                    report::render(entries.as_slice(), format, md::leaderboard)?
                );
                entries.is_empty()
            };

            if empty {
                warn!("no submissions matched");
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Bmi(cmd) => {
            let profile = BodyProfile::new(cmd.height_cm, cmd.weight_kg)?;
            let rendered = report::render(&profile, output_format(cmd.format), md::body_profile)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Analyze(cmd) => {
            let kind = match cmd.kind {
                cli::MediaKindArg::Smash => MediaKind::Smash,
                cli::MediaKindArg::PushUps => MediaKind::PushUps,
                cli::MediaKindArg::BodyMetrics => MediaKind::BodyMetrics,
            };
            let request = VisionRequest {
                kind,
                height_cm: cmd.height_cm,
            };
            let analysis = PlaceholderAnalyzer.analyze(&request)?;
            let rendered = report::render(&analysis, output_format(cmd.format), md::vision)?;
            println!("{rendered}");
            warn!("placeholder analyzer in use; values are not measured");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
