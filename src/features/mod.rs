pub mod logos;
pub mod mcqs;
pub mod questions;
pub mod roles;
pub mod settings;
pub mod users;
pub mod websites;
