//! The create/read/update/delete pattern every admin table follows, written
//! once and instantiated per resource.

pub mod controller;
pub mod dialog;
pub mod field_errors;
pub mod resource;
pub mod search;
pub mod service;

pub use controller::{ResourceController, SubmitOutcome};
pub use dialog::{DialogAction, DialogState};
pub use field_errors::FieldErrors;
pub use resource::{FormMode, Resource};
pub use search::{
    apply_client_side_filters, contains_ci, criterion, equals_ci, flag_filter, flag_matches,
    SearchFilter,
};
pub use service::{page_meta, CrudService};
