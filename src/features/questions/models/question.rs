use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::serde_ext;
use crate::shared::types::AuditFields;

/// Fill-in-the-blank quiz question; `question` holds the text with a
/// `___` marker where the answer goes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FillBlankQuestion {
    #[serde(deserialize_with = "serde_ext::id::deserialize")]
    pub id: i64,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub difficulty_level: Option<String>,
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
