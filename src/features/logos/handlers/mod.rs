pub mod logo_handler;

pub use logo_handler::*;
