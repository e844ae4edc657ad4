//! Fixtures shared by the in-module test suites: an in-memory upstream API and
//! a minimal resource used to exercise the generic CRUD layer.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use crate::modules::upstream::{
    ApiEnvelope, StatusEnvelope, UpstreamApi, UpstreamError, UpstreamRequest,
};
use crate::shared::crud::{contains_ci, criterion, flag_filter, flag_matches};
use crate::shared::crud::{FieldErrors, FormMode, Resource, SearchFilter};
use crate::shared::validation::trim;

/// Bearer token used by router tests
pub const TEST_TOKEN: &str = "test-admin-token";

#[derive(Default)]
struct UpstreamState {
    collections: HashMap<String, Vec<Value>>,
    fixed: HashMap<String, Value>,
    rejections: VecDeque<ApiEnvelope<Value>>,
    failures: VecDeque<UpstreamError>,
    requests: Vec<UpstreamRequest>,
    next_id: i64,
}

/// In-memory stand-in for the upstream REST API.
///
/// Collections are keyed by path; `GET` on a collection pages with the
/// upstream's 0-based `page`/`size` query. Queued rejections and transport
/// failures are returned, in order, before any real handling.
pub struct InMemoryUpstream {
    state: Mutex<UpstreamState>,
}

impl Default for InMemoryUpstream {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUpstream {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(UpstreamState {
                next_id: 1000,
                ..Default::default()
            }),
        }
    }

    pub fn seed(&self, path: &str, items: Vec<Value>) {
        self.lock().collections.insert(path.to_string(), items);
    }

    /// Answer every `GET path` with `data` verbatim
    pub fn respond_with(&self, path: &str, data: Value) {
        self.lock().fixed.insert(path.to_string(), data);
    }

    pub fn reject_next(&self, code: i64, message: &str, errors: Option<Value>) {
        self.lock()
            .rejections
            .push_back(ApiEnvelope::failure(code, message, errors));
    }

    pub fn fail_next(&self, error: UpstreamError) {
        self.lock().failures.push_back(error);
    }

    pub fn items(&self, path: &str) -> Vec<Value> {
        self.lock()
            .collections
            .get(path)
            .cloned()
            .unwrap_or_default()
    }

    pub fn requests(&self) -> Vec<UpstreamRequest> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, UpstreamState> {
        self.state.lock().unwrap()
    }
}

fn split_path(path: &str) -> (String, Option<i64>) {
    match path.rsplit_once('/') {
        Some((base, last)) => match last.parse::<i64>() {
            Ok(id) => (base.to_string(), Some(id)),
            Err(_) => (path.to_string(), None),
        },
        None => (path.to_string(), None),
    }
}

fn query_value(request: &UpstreamRequest, key: &str) -> Option<i64> {
    request
        .query
        .iter()
        .find(|(k, _)| k == key)
        .and_then(|(_, v)| v.parse().ok())
}

fn id_of(item: &Value) -> Option<i64> {
    match item.get("id") {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    }
}

fn not_found() -> ApiEnvelope<Value> {
    ApiEnvelope::failure(404, "Record not found", None)
}

#[async_trait]
impl UpstreamApi for InMemoryUpstream {
    async fn execute(&self, request: UpstreamRequest) -> Result<ApiEnvelope<Value>, UpstreamError> {
        let mut state = self.lock();
        state.requests.push(request.clone());

        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        if let Some(rejection) = state.rejections.pop_front() {
            return Ok(rejection);
        }
        if request.method == Method::GET {
            if let Some(data) = state.fixed.get(&request.path) {
                return Ok(ApiEnvelope::success(data.clone()));
            }
        }

        let (collection, id) = split_path(&request.path);

        let method = request.method.clone();
        let envelope = if method == Method::GET && id.is_none() {
            let items = state.collections.get(&collection).cloned().unwrap_or_default();
            let page = query_value(&request, "page").unwrap_or(0).max(0);
            let size = query_value(&request, "size").unwrap_or(20).max(1);
            let total = items.len() as i64;
            let content: Vec<Value> = items
                .into_iter()
                .skip((page * size) as usize)
                .take(size as usize)
                .collect();
            ApiEnvelope::success(json!({
                "content": content,
                "page": page,
                "size": size,
                "totalElements": total,
                "totalPages": (total + size - 1) / size,
            }))
        } else if method == Method::GET {
            state
                .collections
                .get(&collection)
                .and_then(|items| items.iter().find(|i| id_of(i) == id).cloned())
                .map(ApiEnvelope::success)
                .unwrap_or_else(not_found)
        } else if method == Method::POST && id.is_none() {
            state.next_id += 1;
            let new_id = state.next_id;
            let mut item = request.body.clone().unwrap_or_else(|| json!({}));
            item["id"] = json!(new_id);
            state
                .collections
                .entry(collection)
                .or_default()
                .push(item.clone());
            ApiEnvelope::success(item)
        } else if method == Method::PUT && id.is_some() {
            let body = request.body.clone().unwrap_or_else(|| json!({}));
            let updated = state.collections.get_mut(&collection).and_then(|items| {
                let item = items.iter_mut().find(|i| id_of(i) == id)?;
                if let (Some(target), Some(fields)) = (item.as_object_mut(), body.as_object()) {
                    for (key, value) in fields {
                        target.insert(key.clone(), value.clone());
                    }
                }
                Some(item.clone())
            });
            updated.map(ApiEnvelope::success).unwrap_or_else(not_found)
        } else if method == Method::DELETE && id.is_some() {
            let removed = state.collections.get_mut(&collection).and_then(|items| {
                let index = items.iter().position(|i| id_of(i) == id)?;
                Some(items.remove(index))
            });
            match removed {
                Some(_) => ApiEnvelope {
                    status: StatusEnvelope::ok(),
                    data: None,
                },
                None => not_found(),
            }
        } else {
            ApiEnvelope::failure(405, "Method not allowed", None)
        };

        Ok(envelope)
    }
}

// =============================================================================
// WIDGET RESOURCE
// =============================================================================

pub const WIDGETS_PATH: &str = "/v1/widgets";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WidgetForm {
    #[validate(length(min = 1, max = 50, message = "Name is required"))]
    pub name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct WidgetSearch {
    pub name: Option<String>,
    pub is_active: Option<String>,
}

impl SearchFilter<Widget> for WidgetSearch {
    fn is_empty(&self) -> bool {
        criterion(&self.name).is_none() && flag_filter(&self.is_active).is_none()
    }

    fn matches(&self, item: &Widget) -> bool {
        contains_ci(Some(item.name.as_str()), &self.name)
            && flag_matches(item.is_active, &self.is_active)
    }
}

pub struct WidgetResource;

impl Resource for WidgetResource {
    type Item = Widget;
    type Form = WidgetForm;
    type Search = WidgetSearch;

    const NAME: &'static str = "Widget";
    const PATH: &'static str = WIDGETS_PATH;
    const FORM_FIELDS: &'static [&'static str] = &["name", "isActive"];

    fn item_id(item: &Widget) -> i64 {
        item.id
    }

    fn form_from_item(item: &Widget) -> WidgetForm {
        WidgetForm {
            name: item.name.clone(),
            is_active: item.is_active,
        }
    }

    fn normalize(form: WidgetForm) -> WidgetForm {
        WidgetForm {
            name: trim(form.name),
            ..form
        }
    }

    fn check_rules(form: &WidgetForm, _mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if form.name.eq_ignore_ascii_case("forbidden") {
            errors.insert("name", "This name is reserved");
        }
        errors
    }
}

pub fn widget(id: i64, name: &str, is_active: bool) -> Value {
    json!({"id": id, "name": name, "isActive": is_active})
}
