pub mod website_service;

pub use website_service::{WebsiteResource, WebsiteService};
