use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::upstream::UpstreamError;

/// The `status` block every upstream response carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEnvelope {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    /// Field name to message(s); shape varies per endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

impl StatusEnvelope {
    pub fn ok() -> Self {
        Self {
            code: 200,
            message: Some("success".to_string()),
            errors: None,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// True when `errors` holds at least one entry
    pub fn has_field_errors(&self) -> bool {
        match &self.errors {
            Some(Value::Object(map)) => !map.is_empty(),
            _ => false,
        }
    }
}

/// `{status: {...}, data: ...}` as returned by the upstream API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: StatusEnvelope,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl ApiEnvelope<Value> {
    pub fn success(data: Value) -> Self {
        Self {
            status: StatusEnvelope::ok(),
            data: Some(data),
        }
    }

    pub fn failure(code: i64, message: &str, errors: Option<Value>) -> Self {
        Self {
            status: StatusEnvelope {
                code,
                message: Some(message.to_string()),
                errors,
            },
            data: None,
        }
    }

    /// Decode `data` into a concrete type; missing data decodes from `null`
    pub fn decode_data<T: DeserializeOwned>(self) -> Result<T, UpstreamError> {
        serde_json::from_value(self.data.unwrap_or(Value::Null))
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

/// One page of a list endpoint, normalised to 0-based `page`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub total_elements: i64,
    #[serde(default)]
    pub total_pages: i64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            page: 0,
            size: 0,
            total_elements: 0,
            total_pages: 0,
        }
    }
}

impl<T> Page<T> {
    /// Wrap an unpaginated list as a single page
    pub fn single(content: Vec<T>) -> Self {
        let len = content.len() as i64;
        Self {
            content,
            page: 0,
            size: len,
            total_elements: len,
            total_pages: if len == 0 { 0 } else { 1 },
        }
    }
}

/// List endpoints answer either with a page object or a bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListData<T> {
    Paged(Page<T>),
    Plain(Vec<T>),
}

/// Decode list `data` into a [`Page`], accepting both list shapes
pub fn decode_page<T: DeserializeOwned>(data: Option<Value>) -> Result<Page<T>, UpstreamError> {
    let value = match data {
        None | Some(Value::Null) => return Ok(Page::default()),
        Some(value) => value,
    };

    match serde_json::from_value::<ListData<T>>(value) {
        Ok(ListData::Paged(page)) => Ok(page),
        Ok(ListData::Plain(items)) => Ok(Page::single(items)),
        Err(e) => Err(UpstreamError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_status_success_range() {
        let mut status = StatusEnvelope::ok();
        assert!(status.is_success());
        status.code = 299;
        assert!(status.is_success());
        status.code = 400;
        assert!(!status.is_success());
        status.code = 0;
        assert!(!status.is_success());
    }

    #[test]
    fn test_envelope_parses_missing_message_and_data() {
        let envelope: ApiEnvelope<Value> =
            serde_json::from_value(json!({"status": {"code": 500}})).unwrap();
        assert_eq!(envelope.status.message, None);
        assert_eq!(envelope.data, None);
        assert!(!envelope.status.has_field_errors());
    }

    #[test]
    fn test_field_errors_detected_only_for_non_empty_objects() {
        let envelope = ApiEnvelope::failure(400, "bad", Some(json!({})));
        assert!(!envelope.status.has_field_errors());
        let envelope = ApiEnvelope::failure(400, "bad", Some(json!({"name": "taken"})));
        assert!(envelope.status.has_field_errors());
    }

    #[test]
    fn test_decode_page_accepts_paged_and_plain() {
        let page: Page<Item> = decode_page(Some(json!({
            "content": [{"id": 1}, {"id": 2}],
            "page": 1,
            "size": 2,
            "totalElements": 6,
            "totalPages": 3
        })))
        .unwrap();
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.total_elements, 6);
        assert_eq!(page.total_pages, 3);

        let page: Page<Item> = decode_page(Some(json!([{"id": 9}]))).unwrap();
        assert_eq!(page.content, vec![Item { id: 9 }]);
        assert_eq!(page.total_pages, 1);

        let page: Page<Item> = decode_page(None).unwrap();
        assert!(page.content.is_empty());
    }

    #[test]
    fn test_decode_page_rejects_garbage() {
        let result: Result<Page<Item>, _> = decode_page(Some(json!("nope")));
        assert!(matches!(result, Err(UpstreamError::Decode(_))));
    }
}
