use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::roles::models::{Role, RoleStatus};
use crate::shared::crud::{contains_ci, criterion, equals_ci, SearchFilter};
use crate::shared::validation::ROLE_CODE_REGEX;

/// Create/update request body, forwarded to the upstream as-is
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleForm {
    #[validate(
        length(min = 1, max = 50, message = "Code must be 1-50 characters"),
        regex(
            path = *ROLE_CODE_REGEX,
            message = "Code must start with a letter and contain only letters, digits or underscores"
        )
    )]
    pub code: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, max = 9999, message = "Sort order must be between 0 and 9999"))]
    pub sort_order: i32,

    /// `null` makes the role a root
    #[serde(default)]
    pub parent_role_id: Option<i64>,

    #[serde(default)]
    pub system_role: bool,

    #[serde(default)]
    pub status: RoleStatus,
}

impl From<&Role> for RoleForm {
    fn from(role: &Role) -> Self {
        Self {
            code: role.code.clone(),
            name: role.name.clone(),
            description: role.description.clone(),
            sort_order: role.sort_order,
            parent_role_id: role.parent_role_id,
            system_role: role.system_role,
            status: role.status,
        }
    }
}

/// Client-side search over the loaded roles
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct RoleSearch {
    /// Substring of the role name
    pub name: Option<String>,
    /// Substring of the role code
    pub code: Option<String>,
    /// `active` or `inactive`
    pub status: Option<String>,
}

impl SearchFilter<Role> for RoleSearch {
    fn is_empty(&self) -> bool {
        criterion(&self.name).is_none()
            && criterion(&self.code).is_none()
            && criterion(&self.status).is_none()
    }

    fn matches(&self, role: &Role) -> bool {
        contains_ci(Some(role.name.as_str()), &self.name)
            && contains_ci(Some(role.code.as_str()), &self.code)
            && equals_ci(Some(role.status.as_str()), &self.status)
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct RoleTreeQuery {
    /// Comma-separated ids of expanded roles
    pub expanded: Option<String>,
    /// Expand every role that has children; overrides `expanded`
    #[serde(default)]
    pub expand_all: bool,
}

impl RoleTreeQuery {
    /// Parsed `expanded` ids; entries that are not integers are skipped
    pub fn expanded_ids(&self) -> Vec<i64> {
        self.expanded
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .filter_map(|id| id.trim().parse::<i64>().ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}
