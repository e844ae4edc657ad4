pub mod mcq_dto;

pub use mcq_dto::{McqForm, McqSearch};
