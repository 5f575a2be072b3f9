use crate::types::assessment::Submission;
use crate::types::scoring::Category;
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Clone)]
pub struct LeaderboardFilter {
    pub category: Option<Category>,
    pub test_id: Option<String>,
    pub limit: usize,
}

impl Default for LeaderboardFilter {
    fn default() -> Self {
        Self {
            category: None,
            test_id: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl LeaderboardFilter {
    pub fn matches(&self, submission: &Submission) -> bool {
        self.category
            .map_or(true, |category| submission.category == category)
            && self
                .test_id
                .as_deref()
                .map_or(true, |test_id| submission.test_id == test_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub submission: Submission,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub user_id: String,
    pub display_name: String,
    pub assessments: usize,
    pub best_score: u8,
    pub average_score: u8,
}

/// Highest score first; ties go to the earlier submission, then the user id.
pub fn leaderboard(submissions: &[Submission], filter: &LeaderboardFilter) -> Vec<LeaderboardEntry> {
    let mut selected = submissions
        .iter()
        .filter(|submission| filter.matches(submission))
        .collect::<Vec<_>>();
    selected.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.recorded_at.cmp(&b.recorded_at))
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    selected
        .into_iter()
        .take(filter.limit)
        .enumerate()
        .map(|(position, submission)| LeaderboardEntry {
            rank: position + 1,
            submission: submission.clone(),
        })
        .collect()
}

/// One row per user, highest average score first.
pub fn player_summaries(submissions: &[Submission]) -> Vec<PlayerSummary> {
    let mut grouped = BTreeMap::<&str, Vec<&Submission>>::new();
    for submission in submissions {
        grouped
            .entry(submission.user_id.as_str())
            .or_default()
            .push(submission);
    }

    let mut summaries = grouped
        .into_iter()
        .map(|(user_id, entries)| {
            let total: u32 = entries.iter().map(|entry| u32::from(entry.score)).sum();
            let average = f64::from(total) / entries.len() as f64;
            PlayerSummary {
                user_id: user_id.to_string(),
                display_name: entries
                    .iter()
                    .find_map(|entry| entry.display_name.clone())
                    .unwrap_or_else(|| "Anonymous".to_string()),
                assessments: entries.len(),
                best_score: entries.iter().map(|entry| entry.score).max().unwrap_or(0),
                average_score: average.round() as u8,
            }
        })
        .collect::<Vec<_>>();
    summaries.sort_by(|a, b| {
        b.average_score
            .cmp(&a.average_score)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
    summaries
}
