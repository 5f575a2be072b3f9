use crate::types::scoring::{Category, Grade};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scored test result, in the shape an external datastore keeps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub category: Category,
    pub test_id: String,
    pub result: f64,
    pub unit: String,
    pub score: u8,
    pub percentile: u8,
    pub grade: Grade,
    pub recorded_at: DateTime<Utc>,
}

impl Submission {
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Anonymous")
    }
}
