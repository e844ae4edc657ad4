use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::serde_ext;
use crate::shared::types::AuditFields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    #[serde(deserialize_with = "serde_ext::id::deserialize")]
    pub id: i64,
    pub name: String,
    pub url: String,
    /// Comma-joined tag list
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}
