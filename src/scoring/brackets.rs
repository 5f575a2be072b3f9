use crate::types::config::BracketConfig;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeBracket {
    pub label: String,
    pub min_age: u32,
    pub max_age: u32,
}

impl AgeBracket {
    pub fn contains(&self, age: u32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }
}

/// Ascending, contiguous age brackets.
#[derive(Debug, Clone)]
pub struct AgeBrackets {
    brackets: Vec<AgeBracket>,
}

impl AgeBrackets {
    pub fn from_config(brackets: &[BracketConfig]) -> Self {
        Self {
            brackets: brackets
                .iter()
                .map(|bracket| AgeBracket {
                    label: bracket.label.clone(),
                    min_age: bracket.min_age,
                    max_age: bracket.max_age,
                })
                .collect(),
        }
    }

    /// Ages below the first bracket land in the first one and ages above the
    /// last bracket land in the last one, so the top bracket acts as "N+".
    pub fn bracket_for(&self, age: u32) -> Option<&AgeBracket> {
        self.brackets
            .iter()
            .find(|bracket| age <= bracket.max_age)
            .or_else(|| self.brackets.last())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgeBracket> {
        self.brackets.iter()
    }

    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }
}
