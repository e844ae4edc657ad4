use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::serde_ext;
use crate::shared::types::AuditFields;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoleStatus {
    #[default]
    #[serde(alias = "ACTIVE")]
    Active,
    #[serde(alias = "INACTIVE")]
    Inactive,
}

impl RoleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleStatus::Active => "active",
            RoleStatus::Inactive => "inactive",
        }
    }
}

/// Role as returned flat by the upstream; the hierarchy is rebuilt from
/// `parent_role_id` on every load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(deserialize_with = "serde_ext::id::deserialize")]
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub level: Option<i32>,
    #[serde(default, deserialize_with = "serde_ext::id::deserialize_option")]
    pub parent_role_id: Option<i64>,
    #[serde(default)]
    pub system_role: bool,
    #[serde(default)]
    pub status: RoleStatus,
    #[serde(flatten)]
    pub audit: AuditFields,
}
