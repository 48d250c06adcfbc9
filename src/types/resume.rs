// src/types/resume.rs
//! Resume data structures

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;

// ===== Raw Record =====

/// A parsed resume document, kept untyped.
///
/// Loading never validates the schema: a record missing `summary` loads fine
/// and only fails once a renderer asks for the field.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeRecord {
    value: Value,
}

impl ResumeRecord {
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    /// Parse a YAML (or JSON) document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let value: Value =
            serde_yaml::from_str(content).context("Failed to parse resume document as YAML")?;
        Ok(Self::from_value(value))
    }

    /// The `name` field when present, for log lines
    pub fn name(&self) -> Option<&str> {
        self.value.get("name").and_then(Value::as_str)
    }

    /// The record as templates see it: `null` values read as `None`, the
    /// same text the typed view gives them.
    pub fn template_value(&self) -> Value {
        scalar::fill_nulls(&self.value)
    }

    /// Typed view of the record. Fails on the first missing or mistyped field.
    pub fn to_resume(&self) -> Result<Resume> {
        serde_yaml::from_value(self.value.clone())
            .context("Resume data does not match the expected structure")
    }
}

// ===== Typed View =====

#[derive(Debug, Clone, Deserialize)]
pub struct Resume {
    #[serde(deserialize_with = "scalar::string")]
    pub name: String,
    pub contact: Contact,
    #[serde(deserialize_with = "scalar::string")]
    pub summary: String,
    #[serde(deserialize_with = "scalar::string_lists")]
    pub technical_skills: IndexMap<String, Vec<String>>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    #[serde(deserialize_with = "scalar::string")]
    pub email: String,
    #[serde(deserialize_with = "scalar::string")]
    pub phone: String,
    #[serde(deserialize_with = "scalar::string")]
    pub linkedin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    #[serde(deserialize_with = "scalar::string")]
    pub title: String,
    #[serde(deserialize_with = "scalar::string")]
    pub company: String,
    #[serde(deserialize_with = "scalar::string")]
    pub start: String,
    #[serde(deserialize_with = "scalar::string")]
    pub end: String,
    #[serde(deserialize_with = "scalar::string")]
    pub location: String,
    #[serde(deserialize_with = "scalar::strings")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    #[serde(deserialize_with = "scalar::string")]
    pub degree: String,
    #[serde(deserialize_with = "scalar::string")]
    pub institution: String,
    #[serde(deserialize_with = "scalar::string")]
    pub year: String,
}

/// YAML writes `year: 2015` or `phone: 5551234` as numbers. These helpers
/// accept any scalar where text is expected; an explicit `null` reads as `None`.
mod scalar {
    use indexmap::IndexMap;
    use serde::de::{Deserialize, Deserializer, Error};
    use serde_yaml::{Mapping, Value};

    pub(super) const NULL_TEXT: &str = "None";

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let value = Value::deserialize(deserializer)?;
        to_text(&value).map_err(D::Error::custom)
    }

    pub fn strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let values = Vec::<Value>::deserialize(deserializer)?;
        values
            .iter()
            .map(|v| to_text(v).map_err(D::Error::custom))
            .collect()
    }

    pub fn string_lists<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<IndexMap<String, Vec<String>>, D::Error> {
        let lists = IndexMap::<String, Vec<Value>>::deserialize(deserializer)?;
        lists
            .into_iter()
            .map(|(key, values)| -> Result<(String, Vec<String>), D::Error> {
                let items = values
                    .iter()
                    .map(|v| to_text(v).map_err(D::Error::custom))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((key, items))
            })
            .collect()
    }

    pub(super) fn to_text(value: &Value) -> Result<String, String> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Tagged(tagged) => to_text(&tagged.value),
            Value::Null => Ok(NULL_TEXT.to_string()),
            Value::Sequence(_) => Err("expected a text value, found a sequence".to_string()),
            Value::Mapping(_) => Err("expected a text value, found a mapping".to_string()),
        }
    }

    pub(super) fn fill_nulls(value: &Value) -> Value {
        match value {
            Value::Null => Value::String(NULL_TEXT.to_string()),
            Value::Sequence(items) => Value::Sequence(items.iter().map(fill_nulls).collect()),
            Value::Mapping(map) => Value::Mapping(
                map.iter()
                    .map(|(k, v)| (k.clone(), fill_nulls(v)))
                    .collect::<Mapping>(),
            ),
            Value::Tagged(tagged) => fill_nulls(&tagged.value),
            other => other.clone(),
        }
    }
}
