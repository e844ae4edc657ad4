pub mod role_service;
pub mod role_tree;

pub use role_service::{RoleResource, RoleService};
pub use role_tree::{flatten_for_display, ExpansionState, RoleTreeView};
