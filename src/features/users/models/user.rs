use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::serde_ext;
use crate::shared::types::AuditFields;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    #[default]
    #[serde(alias = "ACTIVE")]
    Active,
    #[serde(alias = "LOCKED")]
    Locked,
    #[serde(alias = "SUSPENDED")]
    Suspended,
    #[serde(alias = "PENDING_VERIFICATION")]
    PendingVerification,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Locked => "locked",
            AccountStatus::Suspended => "suspended",
            AccountStatus::PendingVerification => "pending_verification",
        }
    }
}

/// Admin view of a user account. The password is never returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "serde_ext::id::deserialize")]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile_country_code: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub account_status: AccountStatus,
    #[serde(flatten)]
    pub audit: AuditFields,
}
