pub mod mcq_handler;

pub use mcq_handler::*;
