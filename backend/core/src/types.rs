//! Shared data model for the ingredient analysis pipeline.
//!
//! `IngredientRecord` and `Category` form the stable serialization
//! contract consumed by whatever UI or API layer sits on top.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// Health-impact category of an ingredient.
///
/// Serialized lowercase (`"safe"`, `"caution"`, `"danger"`) — these
/// strings are part of the wire contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Safe,
    Caution,
    Danger,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Safe => "safe",
            Category::Caution => "caution",
            Category::Danger => "danger",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "safe" => Ok(Category::Safe),
            "caution" => Ok(Category::Caution),
            "danger" => Ok(Category::Danger),
            other => Err(ScanError::MalformedRecord {
                name: String::new(),
                reason: format!("unknown category '{other}'"),
            }),
        }
    }
}

/// One curated knowledge-base entry.
///
/// `name` is canonical lowercase and unique within a knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRecord {
    pub name: String,
    pub impact: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A tokenized ingredient string awaiting classification.
///
/// Created per pipeline invocation and discarded after classification;
/// it has no identity beyond its position in the candidate sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The piece as it appeared in the segment (trimmed).
    pub raw_text: String,
    /// Cleaned, lowercased form used for knowledge-base lookup.
    /// Always at least two characters long.
    pub normalized_text: String,
}

impl Candidate {
    pub fn new(raw_text: impl Into<String>, normalized_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            normalized_text: normalized_text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Danger).unwrap(), "\"danger\"");
        assert_eq!(serde_json::to_string(&Category::Safe).unwrap(), "\"safe\"");
    }

    #[test]
    fn category_parses_wire_strings() {
        assert_eq!("caution".parse::<Category>().unwrap(), Category::Caution);
        assert!("harmless".parse::<Category>().is_err());
    }

    #[test]
    fn record_uses_camel_case_fields() {
        let record = IngredientRecord {
            name: "sugar".into(),
            impact: "May contribute to various health issues".into(),
            category: Category::Caution,
            description: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["category"], "caution");
        assert!(json.get("description").is_none());
    }
}
