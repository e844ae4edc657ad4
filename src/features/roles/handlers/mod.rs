pub mod role_handler;

pub use role_handler::*;
