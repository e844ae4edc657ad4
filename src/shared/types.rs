use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::shared::crud::FieldErrors;
use crate::shared::serde_ext;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    /// Field name to message; unmapped problems are reported under `general`
    pub errors: Option<FieldErrors>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Total records known to the upstream
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
    /// Records on this page left after client-side filtering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtered: Option<i64>,
}

/// Audit columns carried by every upstream record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditFields {
    #[serde(default, deserialize_with = "serde_ext::datetime::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "serde_ext::datetime::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "serde_ext::text::deserialize_option")]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "serde_ext::text::deserialize_option")]
    pub updated_by: Option<String>,
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Sort direction for list endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Standard pagination query parameters for all list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Number of items per page (default: 20, max: 500)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 500)]
    pub page_size: i64,

    /// Upstream field to sort by (e.g. `displayOrder`)
    pub sort: Option<String>,

    /// Sort direction (default: asc)
    #[serde(default)]
    pub direction: SortDirection,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
            direction: SortDirection::default(),
        }
    }
}

impl PaginationQuery {
    /// 0-based page index used by the upstream API
    pub fn upstream_page(&self) -> i64 {
        self.page.max(1) - 1
    }

    /// Page size clamped to `1..=MAX_PAGE_SIZE`
    pub fn limit(&self) -> i64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }

    /// Query pairs understood by the upstream list endpoints
    pub fn to_upstream_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_string(), self.upstream_page().to_string()),
            ("size".to_string(), self.limit().to_string()),
        ];
        if let Some(sort) = self.sort.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            query.push((
                "sort".to_string(),
                format!("{},{}", sort, self.direction.as_str()),
            ));
        }
        query
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<FieldErrors>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}
