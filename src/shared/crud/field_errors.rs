use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::shared::constants::GENERAL_ERROR_KEY;

/// Field name to message map shown under form inputs.
///
/// Only the first message per field is kept. Messages that belong to no known
/// form field are joined under [`GENERAL_ERROR_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Record a message for a field unless it already has one
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Append to the general banner
    pub fn push_general(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref().trim();
        if message.is_empty() {
            return;
        }
        match self.0.get_mut(GENERAL_ERROR_KEY) {
            Some(existing) => {
                existing.push_str("; ");
                existing.push_str(message);
            }
            None => {
                self.0
                    .insert(GENERAL_ERROR_KEY.to_string(), message.to_string());
            }
        }
    }

    pub fn general(&self) -> Option<&str> {
        self.get(GENERAL_ERROR_KEY)
    }

    /// Merge another map in; fields already present keep their message
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            if field == GENERAL_ERROR_KEY {
                self.push_general(message);
            } else {
                self.insert(field, message);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Map the upstream `status.errors` value onto form fields.
    ///
    /// Accepts `{field: "msg"}`, `{field: ["msg", ...]}` or any other JSON
    /// value per key. Keys not listed in `known_fields` go to the general banner.
    pub fn from_server(errors: &Value, known_fields: &[&str]) -> Self {
        let mut result = Self::new();

        match errors {
            Value::Object(map) => {
                for (field, value) in map {
                    let Some(message) = server_message(value) else {
                        continue;
                    };
                    if known_fields.contains(&field.as_str()) {
                        result.insert(field.clone(), message);
                    } else {
                        result.push_general(message);
                    }
                }
            }
            Value::Null => {}
            other => {
                if let Some(message) = server_message(other) {
                    result.push_general(message);
                }
            }
        }

        result
    }

    /// Convert validator output, renaming Rust field names to the camelCase
    /// keys the forms are serialized with.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut result = Self::new();

        for (field, field_errors) in errors.field_errors() {
            let key = to_camel_case(&field.to_string());
            let message = field_errors
                .first()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => describe_code(&key, &e.code),
                })
                .unwrap_or_else(|| format!("{} is invalid", key));
            result.insert(key, message);
        }

        result
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        Self::from_validation(&errors)
    }
}

fn server_message(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(server_message),
        other => Some(other.to_string()),
    }
}

fn describe_code(field: &str, code: &str) -> String {
    match code {
        "length" => format!("{} has an invalid length", field),
        "range" => format!("{} is out of range", field),
        "email" => format!("{} must be a valid email address", field),
        "url" => format!("{} must be a valid URL", field),
        "regex" => format!("{} has an invalid format", field),
        "required" => format!("{} is required", field),
        _ => format!("{} is invalid", field),
    }
}

/// `display_order` -> `displayOrder`
pub fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
