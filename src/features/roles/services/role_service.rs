use crate::core::error::{AppError, Result};
use crate::features::roles::dtos::{RoleForm, RoleRow, RoleSearch, RoleTreeQuery};
use crate::features::roles::models::Role;
use crate::features::roles::services::{ExpansionState, RoleTreeView};
use crate::shared::crud::{
    apply_client_side_filters, page_meta, CrudService, FieldErrors, FormMode, Resource,
};
use crate::shared::types::{Meta, PaginationQuery};
use crate::shared::validation::{trim, trim_opt};

pub struct RoleResource;

impl Resource for RoleResource {
    type Item = Role;
    type Form = RoleForm;
    type Search = RoleSearch;

    const NAME: &'static str = "Role";
    const PATH: &'static str = "/v1/roles";
    const FORM_FIELDS: &'static [&'static str] = &[
        "code",
        "name",
        "description",
        "sortOrder",
        "parentRoleId",
        "systemRole",
        "status",
    ];
    const GUARDS_DELETE: bool = true;

    fn item_id(role: &Role) -> i64 {
        role.id
    }

    fn form_from_item(role: &Role) -> RoleForm {
        RoleForm::from(role)
    }

    fn normalize(form: RoleForm) -> RoleForm {
        RoleForm {
            code: trim(form.code),
            name: trim(form.name),
            description: trim_opt(form.description),
            ..form
        }
    }

    fn check_rules(form: &RoleForm, mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let (FormMode::Update { id }, Some(parent)) = (mode, form.parent_role_id) {
            if parent == id {
                errors.insert("parentRoleId", "A role cannot be its own parent");
            }
        }
        errors
    }

    fn guard_delete(role: &Role) -> Result<()> {
        if role.system_role {
            return Err(AppError::Forbidden(format!(
                "System role {} cannot be deleted",
                role.code
            )));
        }
        Ok(())
    }
}

pub type RoleService = CrudService<RoleResource>;

impl CrudService<RoleResource> {
    /// Load one page of roles, apply the search form and flatten the
    /// resulting forest for display.
    pub async fn tree(
        &self,
        pagination: &PaginationQuery,
        search: &RoleSearch,
        query: &RoleTreeQuery,
        token: Option<&str>,
    ) -> Result<(Vec<RoleRow>, Meta)> {
        let page = self.list(pagination, token).await?;
        let roles = apply_client_side_filters(&page.content, search);
        let meta = page_meta(&page, roles.len());

        let mut view = RoleTreeView::new(roles, ExpansionState::from_ids(query.expanded_ids()));
        if query.expand_all {
            view.expand_all();
        }

        let rows = view.rows();
        tracing::debug!(
            "Role tree: {} roots, {} visible rows",
            view.forest().len(),
            rows.len()
        );
        Ok((rows, meta))
    }
}
