pub mod logo_service;

pub use logo_service::{LogoResource, LogoService};
