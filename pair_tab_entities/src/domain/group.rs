use std::{fmt::Display, str::FromStr};

use serde::{Serialize, Deserialize};

use crate::error::ValidationError;

/// Coarse classification of a competitor ("A", "B", ...). Labels order
/// lexicographically, so "A" ranks above "B".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupLabel(String);

impl GroupLabel {
    pub fn new(label: impl Into<String>) -> Result<Self, ValidationError> {
        let label: String = label.into();
        let label = label.trim();
        if label.is_empty() {
            return Err(ValidationError::EmptyGroupLabel);
        }
        Ok(GroupLabel(label.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GroupLabel {
    fn default() -> Self {
        GroupLabel("A".into())
    }
}

impl Display for GroupLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GroupLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupLabel::new(s)
    }
}

impl TryFrom<String> for GroupLabel {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        GroupLabel::new(value)
    }
}

impl From<GroupLabel> for String {
    fn from(value: GroupLabel) -> Self {
        value.0
    }
}
