// * Wire types for the crew search endpoint.
// * Response shape: {"result": [{"id": 123, "data": [{"name", "rank", "gw_num", "points"?}]}]}

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request body; the endpoint takes a single free-text field
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub search: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub result: Vec<SearchHit>,
}

/// One matched crew
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchHit {
    #[serde(deserialize_with = "de_identifier")]
    pub id: String,
    #[serde(default)]
    pub data: Vec<SearchEntry>,
}

/// The crew's result in one past event
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchEntry {
    #[serde(default)]
    pub name: String,
    #[serde(deserialize_with = "de_integer")]
    pub rank: i64,
    #[serde(deserialize_with = "de_integer")]
    pub gw_num: i64,
    #[serde(default, deserialize_with = "de_optional_integer")]
    pub points: Option<i64>,
}

// * Identifiers arrive as JSON numbers (sometimes floats) or strings
fn de_identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => number_to_i64(&n)
            .map(|i| i.to_string())
            .ok_or_else(|| serde::de::Error::custom(format!("non-integral id {}", n))),
        other => Err(serde::de::Error::custom(format!("unexpected id {}", other))),
    }
}

fn de_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    de_optional_integer(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("missing integer"))
}

fn de_optional_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => number_to_i64(&n)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("non-integral number {}", n))),
        Some(other) => Err(serde::de::Error::custom(format!("expected number, got {}", other))),
    }
}

fn number_to_i64(n: &serde_json::Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })
}
