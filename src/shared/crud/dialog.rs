use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};
use crate::shared::crud::{FieldErrors, Resource};

/// Which layout a dialog renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DialogAction {
    View,
    Create,
    Edit,
    Delete,
}

impl DialogAction {
    /// View and delete dialogs show the record without inputs
    pub fn is_read_only(&self) -> bool {
        matches!(self, DialogAction::View | DialogAction::Delete)
    }
}

/// Open dialog, its selected record, the form being edited and its errors.
///
/// `action == None` means no dialog is shown.
pub struct DialogState<R: Resource> {
    action: Option<DialogAction>,
    selected: Option<R::Item>,
    form: R::Form,
    errors: FieldErrors,
}

impl<R: Resource> Default for DialogState<R> {
    fn default() -> Self {
        Self {
            action: None,
            selected: None,
            form: R::Form::default(),
            errors: FieldErrors::new(),
        }
    }
}

impl<R: Resource> DialogState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action(&self) -> Option<DialogAction> {
        self.action
    }

    pub fn is_open(&self) -> bool {
        self.action.is_some()
    }

    pub fn selected(&self) -> Option<&R::Item> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected.as_ref().map(R::item_id)
    }

    pub fn form(&self) -> &R::Form {
        &self.form
    }

    /// Editing a field clears nothing; errors stay until the next submit or close
    pub fn form_mut(&mut self) -> &mut R::Form {
        &mut self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn open_create(&mut self) {
        self.action = Some(DialogAction::Create);
        self.selected = None;
        self.form = R::Form::default();
        self.errors.clear();
    }

    /// Open a row action. Edit prefills the form from the record.
    pub fn open(&mut self, action: DialogAction, item: Option<R::Item>) -> Result<()> {
        if action == DialogAction::Create {
            self.open_create();
            return Ok(());
        }

        let item = item.ok_or_else(|| {
            AppError::BadRequest(format!("Select a {} first", R::NAME.to_lowercase()))
        })?;

        self.form = if action == DialogAction::Edit {
            R::form_from_item(&item)
        } else {
            R::Form::default()
        };
        self.action = Some(action);
        self.selected = Some(item);
        self.errors.clear();
        Ok(())
    }

    /// Replace the error map, e.g. after client-side validation
    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Merge server-side errors into the current map
    pub fn merge_errors(&mut self, errors: FieldErrors) {
        self.errors.merge(errors);
    }

    /// Back to no dialog; form data and errors are reset
    pub fn close(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{Widget, WidgetResource};

    fn item() -> Widget {
        Widget {
            id: 5,
            name: "Lamp".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn test_starts_closed() {
        let dialog = DialogState::<WidgetResource>::new();
        assert!(!dialog.is_open());
        assert_eq!(dialog.action(), None);
        assert!(dialog.selected().is_none());
    }

    #[test]
    fn test_edit_prefills_form_and_view_does_not() {
        let mut dialog = DialogState::<WidgetResource>::new();
        dialog.open(DialogAction::Edit, Some(item())).unwrap();
        assert_eq!(dialog.action(), Some(DialogAction::Edit));
        assert_eq!(dialog.form().name, "Lamp");
        assert_eq!(dialog.selected_id(), Some(5));

        dialog.open(DialogAction::View, Some(item())).unwrap();
        assert_eq!(dialog.form().name, "");
        assert!(dialog.action().unwrap().is_read_only());
    }

    #[test]
    fn test_row_actions_require_item() {
        let mut dialog = DialogState::<WidgetResource>::new();
        let err = dialog.open(DialogAction::Delete, None).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "Select a widget first"));
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_create_ignores_item_and_clears_selection() {
        let mut dialog = DialogState::<WidgetResource>::new();
        dialog.open(DialogAction::Edit, Some(item())).unwrap();
        dialog.open(DialogAction::Create, Some(item())).unwrap();
        assert_eq!(dialog.action(), Some(DialogAction::Create));
        assert!(dialog.selected().is_none());
        assert_eq!(dialog.form().name, "");
    }

    #[test]
    fn test_close_resets_form_and_errors() {
        let mut dialog = DialogState::<WidgetResource>::new();
        dialog.open_create();
        dialog.form_mut().name = "Draft".to_string();
        let mut errors = FieldErrors::new();
        errors.insert("name", "taken");
        dialog.merge_errors(errors);
        assert_eq!(dialog.errors().len(), 1);

        dialog.close();
        assert!(!dialog.is_open());
        assert_eq!(dialog.form().name, "");
        assert!(dialog.errors().is_empty());
    }

    #[test]
    fn test_reopening_clears_previous_errors() {
        let mut dialog = DialogState::<WidgetResource>::new();
        dialog.open_create();
        let mut errors = FieldErrors::new();
        errors.insert("name", "required");
        dialog.set_errors(errors);

        dialog.open(DialogAction::Edit, Some(item())).unwrap();
        assert!(dialog.errors().is_empty());
    }
}
