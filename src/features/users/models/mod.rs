pub mod user;

pub use user::{AccountStatus, User};
