pub mod mcq_service;

pub use mcq_service::{McqResource, McqService};
