//! Frontend Models
//!
//! Data structures matching the remote boss API payloads.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field helper: a value of the wrong type reads as absent instead of
/// failing the whole record
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// One row of the paginated boss list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BossSummary {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<String>,
}

/// Full boss record shown on the detail page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossDetail {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub drops: Option<Drops>,
    #[serde(default, deserialize_with = "lenient")]
    pub health_points: Option<HealthPoints>,
}

/// The API sends drops either as a list or as a single string
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Drops {
    Many(Vec<String>),
    One(String),
}

impl Drops {
    /// Display text: list entries joined with ", "
    pub fn joined(&self) -> String {
        match self {
            Drops::Many(items) => items.join(", "),
            Drops::One(item) => item.clone(),
        }
    }

    /// List entries that are neither text nor numbers are skipped
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(item) => Some(Drops::One(item)),
            Value::Array(items) => Some(Drops::Many(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(text) => Some(text),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect(),
            )),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Drops {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Drops::from_value(value)
            .ok_or_else(|| serde::de::Error::custom("drops must be a string or a list"))
    }
}

/// Health points come as a number for most bosses, as text for a few ("???")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HealthPoints {
    Count(serde_json::Number),
    Text(String),
}

impl HealthPoints {
    pub fn display(&self) -> String {
        match self {
            HealthPoints::Count(n) => n.to_string(),
            HealthPoints::Text(t) => t.clone(),
        }
    }
}

/// Response body of both endpoints. `data` stays raw so its shape can be
/// checked separately from the records inside it.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub total: Option<u64>,
}

/// One page of results as handed to the list controller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BossPage {
    pub bosses: Vec<BossSummary>,
    pub total: Option<u64>,
}
