pub mod question_dto;

pub use question_dto::{QuestionForm, QuestionSearch};
