use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::validation::split_csv;

/// One entry of the `gjpb_app_settings` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AppSetting {
    pub name: String,
    /// Comma-separated option list
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub lang: Option<String>,
}

impl AppSetting {
    pub fn options(&self) -> Vec<String> {
        split_csv(&self.value)
    }

    fn lang_is(&self, lang: &str) -> bool {
        self.lang
            .as_deref()
            .is_some_and(|l| l.trim().eq_ignore_ascii_case(lang.trim()))
    }

    /// Entry for `name` in `lang`.
    ///
    /// Falls back to the entry without a language, then to the first entry
    /// with that name.
    pub fn find<'a>(
        settings: &'a [AppSetting],
        name: &str,
        lang: Option<&str>,
    ) -> Option<&'a AppSetting> {
        let named: Vec<&AppSetting> = settings
            .iter()
            .filter(|s| s.name.trim().eq_ignore_ascii_case(name.trim()))
            .collect();

        lang.and_then(|lang| named.iter().copied().find(|s| s.lang_is(lang)))
            .or_else(|| {
                named
                    .iter()
                    .copied()
                    .find(|s| s.lang.as_deref().map_or(true, |l| l.trim().is_empty()))
            })
            .or_else(|| named.first().copied())
    }
}
