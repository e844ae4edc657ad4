use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::core::error::Result;
use crate::shared::crud::{FieldErrors, SearchFilter};

/// Whether a form is being submitted for a new record or an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update { id: i64 },
}

/// One administrative resource exposed by the upstream API.
///
/// Implementations describe the record, its form and search shapes, and the
/// business rules that go beyond per-field validation. Everything else
/// (fetching, envelope handling, error merging, refresh) is shared.
pub trait Resource: Send + Sync + 'static {
    /// Record as returned by the upstream
    type Item: Clone + Serialize + DeserializeOwned + Send + Sync + 'static;
    /// Create/edit form, also the upstream request body
    type Form: Clone + Default + Serialize + DeserializeOwned + Validate + Send + Sync + 'static;
    /// Client-side search form
    type Search: SearchFilter<Self::Item> + Clone + Default + Send + Sync + 'static;

    /// Human readable singular name used in messages and logs
    const NAME: &'static str;

    /// Upstream collection path, e.g. `/v1/logos`
    const PATH: &'static str;

    /// Serialized form field names; server errors for other keys go to `general`
    const FORM_FIELDS: &'static [&'static str];

    /// Fetch the record and run [`Resource::guard_delete`] before deleting
    const GUARDS_DELETE: bool = false;

    fn item_id(item: &Self::Item) -> i64;

    /// Prefill an edit form from an existing record
    fn form_from_item(item: &Self::Item) -> Self::Form;

    /// Trim strings and normalise tag lists before validation
    fn normalize(form: Self::Form) -> Self::Form;

    /// Cross-field and business rules
    fn check_rules(_form: &Self::Form, _mode: FormMode) -> FieldErrors {
        FieldErrors::new()
    }

    fn guard_delete(_item: &Self::Item) -> Result<()> {
        Ok(())
    }

    /// Field validation followed by business rules
    fn validate_form(form: &Self::Form, mode: FormMode) -> FieldErrors {
        let mut errors = match form.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from_validation(&e),
        };
        errors.merge(Self::check_rules(form, mode));
        errors
    }

    fn item_path(id: i64) -> String {
        format!("{}/{}", Self::PATH, id)
    }
}
