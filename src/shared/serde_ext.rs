//! Lenient deserializers for upstream payloads.
//!
//! The upstream API is not consistent about ids (number vs numeric string) or
//! timestamp layout (RFC 3339 vs `YYYY-MM-DD HH:MM:SS`).

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn into_id<E: serde::de::Error>(self) -> Result<Option<i64>, E> {
        match self {
            RawId::Number(n) => Ok(Some(n)),
            RawId::Text(s) if s.trim().is_empty() => Ok(None),
            RawId::Text(s) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| E::custom(format!("invalid id: {}", s))),
        }
    }
}

pub mod id {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawId::deserialize(deserializer)?
            .into_id()?
            .ok_or_else(|| serde::de::Error::custom("id must not be empty"))
    }

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawId>::deserialize(deserializer)? {
            Some(raw) => raw.into_id(),
            None => Ok(None),
        }
    }
}

/// Free-text audit fields that some upstream endpoints send as numeric user ids
pub mod text {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawText {
        Number(i64),
        Text(String),
    }

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawText>::deserialize(deserializer)? {
            Some(RawText::Number(n)) => Some(n.to_string()),
            Some(RawText::Text(s)) if !s.trim().is_empty() => Some(s),
            _ => None,
        })
    }
}

pub mod datetime {
    use super::*;

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

    pub fn parse(value: &str) -> Option<DateTime<Utc>> {
        let value = value.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(dt.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
            .map(|naive| naive.and_utc())
    }

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", s))),
            None => Ok(None),
        }
    }
}
