use crate::error::ScoreError;
use crate::scoring::benchmarks::normalize_gender;
use crate::types::scoring::{BenchmarkRow, Category, Direction};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// test id -> gender -> bracket label -> thresholds
pub type BenchmarkTable = BTreeMap<String, BTreeMap<String, BTreeMap<String, BenchmarkRow>>>;

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub brackets: Vec<BracketConfig>,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub benchmarks: BenchmarkTable,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BracketConfig {
    pub label: String,
    pub min_age: u32,
    pub max_age: u32,
}

/// One list per category. Unknown category keys are rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    #[serde(default)]
    pub strength: Vec<TestEntry>,
    #[serde(default)]
    pub endurance: Vec<TestEntry>,
    #[serde(default)]
    pub agility: Vec<TestEntry>,
    #[serde(default)]
    pub reflexes: Vec<TestEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestEntry {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub direction: Direction,
}

impl CatalogConfig {
    pub fn entries(&self, category: Category) -> &[TestEntry] {
        match category {
            Category::Strength => &self.strength,
            Category::Endurance => &self.endurance,
            Category::Agility => &self.agility,
            Category::Reflexes => &self.reflexes,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &TestEntry)> {
        Category::ALL.into_iter().flat_map(move |category| {
            self.entries(category)
                .iter()
                .map(move |entry| (category, entry))
        })
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ScoreError> {
        validate_brackets(&self.brackets)?;
        let directions = validate_catalog(&self.catalog)?;

        let labels = self
            .brackets
            .iter()
            .map(|bracket| bracket.label.as_str())
            .collect::<HashSet<_>>();

        for (test_id, genders) in &self.benchmarks {
            let direction = directions.get(test_id.trim()).ok_or_else(|| {
                ScoreError::ConfigParse(format!(
                    "benchmarks.{test_id} refers to a test missing from the catalog"
                ))
            })?;
            let mut seen_genders = HashSet::new();
            for (gender, rows) in genders {
                let normalized = normalize_gender(gender);
                if normalized.is_empty() {
                    return Err(ScoreError::ConfigParse(format!(
                        "benchmarks.{test_id} contains an empty gender key"
                    )));
                }
                if !seen_genders.insert(normalized) {
                    return Err(ScoreError::ConfigParse(format!(
                        "benchmarks.{test_id} has duplicate gender key '{gender}' (keys match case-insensitively)"
                    )));
                }
                for (label, row) in rows {
                    if !labels.contains(label.as_str()) {
                        return Err(ScoreError::ConfigParse(format!(
                            "benchmarks.{test_id}.{gender} refers to unknown age bracket '{label}'"
                        )));
                    }
                    if row
                        .thresholds()
                        .iter()
                        .any(|value| !value.is_finite() || *value < 0.0)
                    {
                        return Err(ScoreError::ConfigParse(format!(
                            "benchmarks.{test_id}.{gender}.{label} thresholds must be finite and non-negative"
                        )));
                    }
                    if !row.is_ordered(*direction) {
                        return Err(ScoreError::ConfigParse(format!(
                            "benchmarks.{test_id}.{gender}.{label} thresholds must be strictly ordered for a {}-is-better test",
                            direction.as_str()
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

fn validate_brackets(brackets: &[BracketConfig]) -> Result<(), ScoreError> {
    if brackets.is_empty() {
        return Err(ScoreError::ConfigParse(
            "at least one age bracket is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for bracket in brackets {
        if bracket.label.trim().is_empty() {
            return Err(ScoreError::ConfigParse(
                "brackets entries must have a non-empty label".to_string(),
            ));
        }
        if !seen.insert(bracket.label.as_str()) {
            return Err(ScoreError::ConfigParse(format!(
                "brackets contains duplicate label: {}",
                bracket.label
            )));
        }
        if bracket.min_age > bracket.max_age {
            return Err(ScoreError::ConfigParse(format!(
                "bracket '{}' has min_age greater than max_age",
                bracket.label
            )));
        }
    }

    for pair in brackets.windows(2) {
        if pair[1].min_age != pair[0].max_age.saturating_add(1) {
            return Err(ScoreError::ConfigParse(format!(
                "brackets '{}' and '{}' must be ascending and contiguous",
                pair[0].label, pair[1].label
            )));
        }
    }

    Ok(())
}

fn validate_catalog(catalog: &CatalogConfig) -> Result<HashMap<&str, Direction>, ScoreError> {
    let mut directions = HashMap::new();
    for (category, entry) in catalog.iter() {
        let id = entry.id.trim();
        if id.is_empty() {
            return Err(ScoreError::ConfigParse(format!(
                "catalog.{category} entries must have a non-empty id"
            )));
        }
        if entry.name.trim().is_empty() || entry.unit.trim().is_empty() {
            return Err(ScoreError::ConfigParse(format!(
                "catalog test '{id}' must have a name and a unit"
            )));
        }
        if directions.insert(id, entry.direction).is_some() {
            return Err(ScoreError::ConfigParse(format!(
                "catalog contains duplicate test id: {id}"
            )));
        }
    }
    Ok(directions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = r#"
[[brackets]]
label = "18-25"
min_age = 18
max_age = 25

[[brackets]]
label = "26-35"
min_age = 26
max_age = 35

[[catalog.strength]]
id = "push-ups-1min"
name = "Push-ups (1 min)"
unit = "reps"
direction = "higher"

[[catalog.endurance]]
id = "100m-sprint"
name = "100m Sprint"
unit = "seconds"
direction = "lower"
"#;

    fn parse(extra: &str) -> ScoringConfig {
        toml::from_str(&format!("{BASE}\n{extra}")).expect("config should parse")
    }

    #[test]
    fn parse_minimal_config() {
        let cfg = parse("");
        assert_eq!(cfg.brackets.len(), 2);
        assert_eq!(cfg.catalog.strength[0].direction, Direction::HigherIsBetter);
        assert_eq!(cfg.catalog.endurance[0].direction, Direction::LowerIsBetter);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_accepts_ordered_benchmarks() {
        let cfg = parse(
            r#"
[benchmarks.push-ups-1min.male]
18-25 = { excellent = 45.0, good = 35.0, average = 25.0, poor = 15.0 }

[benchmarks.100m-sprint.female]
26-35 = { excellent = 13.5, good = 14.5, average = 15.5, poor = 17.5 }
"#,
        );
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_thresholds_ordered_against_direction() {
        let cfg = parse(
            r#"
[benchmarks.100m-sprint.male]
18-25 = { excellent = 15.0, good = 13.5, average = 12.5, poor = 11.5 }
"#,
        );
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("strictly ordered"));
        assert!(err.to_string().contains("lower-is-better"));
    }

    #[test]
    fn validate_rejects_negative_thresholds() {
        let cfg = parse(
            r#"
[benchmarks.push-ups-1min.male]
18-25 = { excellent = 10.0, good = 5.0, average = 1.0, poor = -1.0 }
"#,
        );
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn validate_rejects_benchmark_for_unknown_test() {
        let cfg = parse(
            r#"
[benchmarks.deadlift.male]
18-25 = { excellent = 200.0, good = 150.0, average = 100.0, poor = 60.0 }
"#,
        );
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("missing from the catalog"));
    }

    #[test]
    fn validate_rejects_unknown_bracket_label() {
        let cfg = parse(
            r#"
[benchmarks.push-ups-1min.male]
46-55 = { excellent = 30.0, good = 20.0, average = 15.0, poor = 8.0 }
"#,
        );
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unknown age bracket '46-55'"));
    }

    #[test]
    fn validate_rejects_gap_between_brackets() {
        let toml_str = r#"
[[brackets]]
label = "18-25"
min_age = 18
max_age = 25

[[brackets]]
label = "30-35"
min_age = 30
max_age = 35

[catalog]
"#;
        let cfg: ScoringConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("ascending and contiguous"));
    }

    #[test]
    fn validate_rejects_empty_brackets() {
        let cfg: ScoringConfig =
            toml::from_str("brackets = []\n[catalog]\n").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("at least one age bracket"));
    }

    #[test]
    fn validate_rejects_duplicate_test_ids_across_categories() {
        let cfg = parse(
            r#"
[[catalog.agility]]
id = "push-ups-1min"
name = "Duplicate"
unit = "reps"
direction = "higher"
"#,
        );
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("duplicate test id"));
    }

    #[test]
    fn validate_rejects_gender_keys_differing_only_in_case() {
        let cfg = parse(
            r#"
[benchmarks.push-ups-1min.Male]
18-25 = { excellent = 90.0, good = 70.0, average = 50.0, poor = 30.0 }

[benchmarks.push-ups-1min.male]
18-25 = { excellent = 50.0, good = 40.0, average = 30.0, poor = 20.0 }
"#,
        );
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("duplicate gender key"));
    }

    #[test]
    fn validate_accepts_distinct_gender_keys() {
        let cfg = parse(
            r#"
[benchmarks.push-ups-1min.male]
18-25 = { excellent = 45.0, good = 35.0, average = 25.0, poor = 15.0 }

[benchmarks.push-ups-1min.female]
18-25 = { excellent = 30.0, good = 20.0, average = 15.0, poor = 8.0 }
"#,
        );
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_rejects_unknown_category() {
        let toml_str = r#"
[[brackets]]
label = "18-25"
min_age = 18
max_age = 25

[[catalog.flexibility]]
id = "sit-and-reach"
name = "Sit and Reach"
unit = "cm"
direction = "higher"
"#;
        assert!(toml::from_str::<ScoringConfig>(toml_str).is_err());
    }

    #[test]
    fn parse_rejects_test_without_direction() {
        let toml_str = r#"
[[brackets]]
label = "18-25"
min_age = 18
max_age = 25

[[catalog.reflexes]]
id = "reaction-time"
name = "Reaction Time"
unit = "ms"
"#;
        assert!(toml::from_str::<ScoringConfig>(toml_str).is_err());
    }
}
