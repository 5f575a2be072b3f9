use crate::error::{Result, ScoreError};
use crate::types::config::CatalogConfig;
use crate::types::scoring::{Category, Direction};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestDefinition {
    pub id: String,
    pub category: Category,
    pub name: String,
    pub unit: String,
    pub direction: Direction,
}

/// Immutable registry of known tests, in declaration order per category.
#[derive(Debug, Clone, Default)]
pub struct TestCatalog {
    tests: Vec<TestDefinition>,
    index: HashMap<String, usize>,
}

impl TestCatalog {
    pub fn from_config(config: &CatalogConfig) -> Self {
        let tests = config
            .iter()
            .map(|(category, entry)| TestDefinition {
                id: entry.id.trim().to_string(),
                category,
                name: entry.name.clone(),
                unit: entry.unit.clone(),
                direction: entry.direction,
            })
            .collect::<Vec<_>>();
        let index = tests
            .iter()
            .enumerate()
            .map(|(position, test)| (test.id.clone(), position))
            .collect();
        Self { tests, index }
    }

    pub fn find(&self, test_id: &str) -> Option<&TestDefinition> {
        self.index
            .get(test_id.trim())
            .and_then(|position| self.tests.get(*position))
    }

    /// Like [`find`](Self::find) but reports a missing id as `UnknownTest`.
    pub fn require(&self, test_id: &str) -> Result<&TestDefinition> {
        self.find(test_id)
            .ok_or_else(|| ScoreError::UnknownTest(test_id.to_string()))
    }

    pub fn list_by_category(&self, category: Category) -> impl Iterator<Item = &TestDefinition> {
        self.tests
            .iter()
            .filter(move |test| test.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestDefinition> {
        self.tests.iter()
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}
