pub mod app_setting;

pub use app_setting::AppSetting;
