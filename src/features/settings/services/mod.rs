pub mod settings_service;

pub use settings_service::{SettingsProvider, SettingsService, StaticSettings, UpstreamSettings};
