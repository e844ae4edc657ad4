/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 500;

/// Key under which field errors that match no form field are reported
pub const GENERAL_ERROR_KEY: &str = "general";

// =============================================================================
// SETTINGS
// =============================================================================

/// Storage key of the persisted application settings list
pub const APP_SETTINGS_KEY: &str = "gjpb_app_settings";

// =============================================================================
// FORM LIMITS
// =============================================================================

/// Letters accepted as MCQ answers, in option order
pub const MCQ_OPTION_LETTERS: [&str; 4] = ["A", "B", "C", "D"];
