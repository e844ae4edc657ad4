pub mod role;

pub use role::{Role, RoleStatus};
