//! Lenient coercion for loosely typed record fields.
//!
//! Profile and job records arrive from form input, so CGPA, experience and
//! ratings may be numbers, numeric strings, empty strings, `null`, or junk.
//! Anything that does not parse to a finite number is treated as absent, and
//! every consumer reads absent as zero. No field here ever fails a record.

use std::collections::HashMap;

use serde::de::{Error as _, IgnoredAny};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
    Other(IgnoredAny),
}

impl RawScalar {
    fn into_number(self) -> Option<f64> {
        match self {
            RawScalar::Int(v) => Some(v as f64),
            RawScalar::Float(v) => Some(v).filter(|v| v.is_finite()),
            RawScalar::Text(s) => parse_lenient_number(&s),
            RawScalar::List(_) | RawScalar::Other(_) => None,
        }
    }

    fn into_text(self) -> Option<String> {
        match self {
            RawScalar::Int(v) => Some(v.to_string()),
            RawScalar::Float(v) => Some(v.to_string()),
            RawScalar::Text(s) => Some(s),
            RawScalar::List(items) => Some(items.join(", ")),
            RawScalar::Other(_) => None,
        }
    }
}

/// Parses a numeric form field. Blank, non-numeric and non-finite input is `None`.
pub fn parse_lenient_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Absent or unparsable values count as zero.
pub fn or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// A requirement minimum only applies when it is strictly positive.
/// Absent, zero, negative and unparsable minimums mean "no minimum".
pub fn positive_minimum(required: Option<f64>) -> Option<f64> {
    required.filter(|v| v.is_finite() && *v > 0.0)
}

pub fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawScalar>::deserialize(deserializer)?.and_then(RawScalar::into_number))
}

pub fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawScalar>::deserialize(deserializer)?
        .and_then(RawScalar::into_text)
        .unwrap_or_default())
}

/// Ids are generated by the CRUD layer as either strings or timestamps.
pub fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawScalar>::deserialize(deserializer)? {
        Some(RawScalar::List(_)) | Some(RawScalar::Other(_)) | None => Err(D::Error::custom(
            "record id must be a string or a number",
        )),
        Some(raw) => Ok(raw.into_text().unwrap_or_default()),
    }
}

/// Ratings that cannot be read as numbers are dropped, which scores the same as unrated.
pub fn deserialize_lenient_ratings<'de, D>(deserializer: D) -> Result<HashMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<HashMap<String, RawScalar>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|(candidate_id, value)| value.into_number().map(|v| (candidate_id, v)))
        .collect())
}
