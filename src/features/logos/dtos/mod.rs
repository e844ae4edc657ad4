pub mod logo_dto;

pub use logo_dto::{LogoForm, LogoSearch};
