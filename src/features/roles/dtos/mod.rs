pub mod role_dto;
pub mod role_tree_dto;

pub use role_dto::{RoleForm, RoleSearch, RoleTreeQuery};
pub use role_tree_dto::{RoleRow, RoleTreeNode};
