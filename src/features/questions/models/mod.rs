pub mod question;

pub use question::FillBlankQuestion;
