use crate::leaderboard::{LeaderboardEntry, PlayerSummary};
use crate::profile::BodyProfile;
use crate::scoring::catalog::TestDefinition;
use crate::types::report::{BenchmarkListing, ConfigSummary, ScoreReport};
use crate::types::scoring::Category;
use crate::vision::VisionAnalysis;

pub fn score_report(report: &ScoreReport) -> String {
    let submission = &report.submission;
    let mut output = String::new();
    output.push_str("# Assessment Score\n\n");
    output.push_str(&format!(
        "- test: {} ({})\n- category: {}\n- result: {} {}\n",
        report.test_name, submission.test_id, submission.category, submission.result, submission.unit
    ));
    if let Some(bracket) = &report.bracket {
        output.push_str(&format!("- age bracket: {bracket}\n"));
    }
    output.push_str(&format!(
        "\nScore: {}/100 (percentile {}, {})\n",
        submission.score, submission.percentile, submission.grade
    ));

    match &report.benchmark {
        Some(row) => output.push_str(&format!(
            "\n## Benchmark\n\n- excellent: {}\n- good: {}\n- average: {}\n- poor: {}\n",
            row.excellent, row.good, row.average, row.poor
        )),
        None => output.push_str("\nNo benchmark applies; neutral score reported.\n"),
    }
    output
}

pub fn catalog(tests: &[TestDefinition]) -> String {
    let mut output = String::from("# Test Catalog\n");
    for category in Category::ALL {
        let in_category = tests
            .iter()
            .filter(|test| test.category == category)
            .collect::<Vec<_>>();
        if in_category.is_empty() {
            continue;
        }
        output.push_str(&format!("\n## {category}\n\n"));
        for test in in_category {
            output.push_str(&format!(
                "- {}: {} [{}, {} is better]\n",
                test.id,
                test.name,
                test.unit,
                test.direction.as_str()
            ));
        }
    }
    output
}

pub fn benchmarks(listing: &BenchmarkListing<'_>) -> String {
    let mut output = format!(
        "# Benchmarks: {} ({}, {} is better)\n\n",
        listing.test.name,
        listing.test.unit,
        listing.test.direction.as_str()
    );
    if listing.rows.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    output.push_str("| gender | bracket | excellent | good | average | poor |\n");
    output.push_str("|---|---|---|---|---|---|\n");
    for entry in &listing.rows {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            entry.gender,
            entry.bracket,
            entry.row.excellent,
            entry.row.good,
            entry.row.average,
            entry.row.poor
        ));
    }
    output
}

pub fn leaderboard(entries: &[LeaderboardEntry]) -> String {
    let mut output = String::from("# Leaderboard\n\n");
    if entries.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for entry in entries {
        let submission = &entry.submission;
        output.push_str(&format!(
            "{}. {} - {} {} {} ({}/100, {})\n",
            entry.rank,
            submission.label(),
            submission.test_id,
            submission.result,
            submission.unit,
            submission.score,
            submission.grade
        ));
    }
    output
}

pub fn player_summaries(summaries: &[PlayerSummary]) -> String {
    let mut output = String::from("# Players\n\n");
    if summaries.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for summary in summaries {
        output.push_str(&format!(
            "- {} ({}): average {}, best {}, {} assessment(s)\n",
            summary.display_name,
            summary.user_id,
            summary.average_score,
            summary.best_score,
            summary.assessments
        ));
    }
    output
}

pub fn body_profile(profile: &BodyProfile) -> String {
    format!(
        "# Body Profile\n\n- height: {} cm\n- weight: {} kg\n- BMI: {:.1} ({})\n- BMI score: {}/100\n",
        profile.height_cm, profile.weight_kg, profile.bmi, profile.category, profile.bmi_score
    )
}

pub fn vision(analysis: &VisionAnalysis) -> String {
    let mut output = String::from("# Media Analysis\n\n");
    output.push_str(&format!(
        "{}: {} {}\n",
        analysis.primary_metric.name, analysis.primary_metric.value, analysis.primary_metric.unit
    ));
    if let Some(technique) = analysis.technique {
        output.push_str(&format!("technique: {technique}\n"));
    }
    output.push('\n');
    for (name, value) in &analysis.secondary_metrics {
        output.push_str(&format!("- {name}: {value}\n"));
    }
    output
}

pub fn config_summary(summary: &ConfigSummary) -> String {
    format!(
        "# Configuration\n\n- age brackets: {}\n- tests: {}\n- benchmark rows: {}\n",
        summary.brackets.join(", "),
        summary.tests,
        summary.benchmark_rows
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::Direction;

    fn definition(id: &str, category: Category) -> TestDefinition {
        TestDefinition {
            id: id.to_string(),
            category,
            name: id.to_uppercase(),
            unit: "seconds".to_string(),
            direction: Direction::LowerIsBetter,
        }
    }

    #[test]
    fn catalog_groups_by_category_and_skips_empty_ones() {
        let rendered = catalog(&[
            definition("shuttle-run", Category::Agility),
            definition("100m-sprint", Category::Endurance),
        ]);
        assert!(rendered.contains("## endurance"));
        assert!(rendered.contains("## agility"));
        assert!(!rendered.contains("## strength"));
        assert!(rendered.contains("lower is better"));
        let endurance = rendered.find("## endurance").expect("endurance heading");
        let agility = rendered.find("## agility").expect("agility heading");
        assert!(endurance < agility);
    }

    #[test]
    fn empty_benchmark_listing_says_none() {
        let test = definition("cone-drill", Category::Agility);
        let rendered = benchmarks(&BenchmarkListing {
            test: &test,
            rows: Vec::new(),
        });
        assert!(rendered.contains("- none"));
    }

    #[test]
    fn empty_leaderboard_says_none() {
        assert!(leaderboard(&[]).contains("- none"));
        assert!(player_summaries(&[]).contains("- none"));
    }
}
