use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::serde_ext;
use crate::shared::types::AuditFields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mcq {
    #[serde(deserialize_with = "serde_ext::id::deserialize")]
    pub id: i64,
    pub question: String,
    #[serde(default)]
    pub option_a: Option<String>,
    #[serde(default)]
    pub option_b: Option<String>,
    #[serde(default)]
    pub option_c: Option<String>,
    #[serde(default)]
    pub option_d: Option<String>,
    /// Comma-joined option letters, e.g. `A,C`
    #[serde(default)]
    pub correct_answers: String,
    #[serde(default)]
    pub is_multiple_correct: bool,
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
