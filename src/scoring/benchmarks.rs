use crate::types::config::BenchmarkTable;
use crate::types::scoring::BenchmarkRow;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkEntry<'a> {
    pub gender: &'a str,
    pub bracket: &'a str,
    #[serde(flatten)]
    pub row: BenchmarkRow,
}

/// Read-only benchmark thresholds keyed by test, gender and bracket label.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkRepository {
    table: BenchmarkTable,
}

impl BenchmarkRepository {
    pub fn from_table(table: &BenchmarkTable) -> Self {
        let mut normalized = BenchmarkTable::new();
        for (test_id, genders) in table {
            let slot = normalized.entry(test_id.trim().to_string()).or_default();
            for (gender, rows) in genders {
                slot.entry(normalize_gender(gender))
                    .or_default()
                    .extend(rows.iter().map(|(label, row)| (label.clone(), *row)));
            }
        }
        Self { table: normalized }
    }

    /// `None` for an unknown test, an unrecognized gender, or a bracket with
    /// no row. Never an error.
    pub fn lookup(&self, test_id: &str, gender: &str, bracket: &str) -> Option<&BenchmarkRow> {
        self.table
            .get(test_id.trim())
            .and_then(|genders| genders.get(&normalize_gender(gender)))
            .and_then(|rows| rows.get(bracket))
    }

    pub fn rows_for(&self, test_id: &str) -> Vec<BenchmarkEntry<'_>> {
        self.table
            .get(test_id.trim())
            .into_iter()
            .flat_map(|genders| {
                genders.iter().flat_map(|(gender, rows)| {
                    rows.iter().map(move |(bracket, row)| BenchmarkEntry {
                        gender: gender.as_str(),
                        bracket: bracket.as_str(),
                        row: *row,
                    })
                })
            })
            .collect()
    }

    /// Rows for a test, optionally restricted to one gender.
    pub fn rows_matching(&self, test_id: &str, gender: Option<&str>) -> Vec<BenchmarkEntry<'_>> {
        let gender = gender.map(normalize_gender);
        self.rows_for(test_id)
            .into_iter()
            .filter(|entry| gender.as_deref().map_or(true, |gender| entry.gender == gender))
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.table
            .values()
            .flat_map(|genders| genders.values())
            .map(|rows| rows.len())
            .sum()
    }
}

pub fn normalize_gender(gender: &str) -> String {
    gender.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::ScoringConfig;

    fn repository() -> BenchmarkRepository {
        let config: ScoringConfig = toml::from_str(
            r#"
[[brackets]]
label = "18-25"
min_age = 18
max_age = 25

[catalog]

[benchmarks.grip-strength.male]
18-25 = { excellent = 50.0, good = 45.0, average = 40.0, poor = 30.0 }

[benchmarks.grip-strength.Female]
18-25 = { excellent = 35.0, good = 30.0, average = 25.0, poor = 18.0 }
"#,
        )
        .expect("config should parse");
        BenchmarkRepository::from_table(&config.benchmarks)
    }

    #[test]
    fn lookup_finds_exact_row() {
        let repository = repository();
        let row = repository
            .lookup("grip-strength", "male", "18-25")
            .expect("row should exist");
        assert_eq!(row.excellent, 50.0);
        assert_eq!(row.poor, 30.0);
    }

    #[test]
    fn lookup_matches_gender_case_insensitively() {
        let repository = repository();
        assert!(repository.lookup("grip-strength", "FEMALE", "18-25").is_some());
        assert!(repository.lookup("grip-strength", " Male ", "18-25").is_some());
    }

    #[test]
    fn lookup_returns_none_for_missing_keys() {
        let repository = repository();
        assert!(repository.lookup("nonexistent-test", "male", "18-25").is_none());
        assert!(repository.lookup("grip-strength", "other", "18-25").is_none());
        assert!(repository.lookup("grip-strength", "male", "26-35").is_none());
    }

    #[test]
    fn rows_for_lists_every_row_of_a_test() {
        let repository = repository();
        let rows = repository.rows_for("grip-strength");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().any(|entry| entry.gender == "female"));
        assert!(repository.rows_for("deadlift").is_empty());
        assert_eq!(repository.rows_matching("grip-strength", Some("Female")).len(), 1);
        assert_eq!(repository.rows_matching("grip-strength", None).len(), 2);
        assert_eq!(repository.row_count(), 2);
    }
}
