use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::logos::models::Logo;
use crate::shared::crud::{contains_ci, criterion, equals_ci, flag_filter, flag_matches, SearchFilter};
use crate::shared::validation::LANG_REGEX;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoForm {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(
        length(min = 1, max = 500, message = "URL is required"),
        url(message = "URL must be a valid URL")
    )]
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Tags must not exceed 500 characters"))]
    pub tags: Option<String>,

    #[validate(regex(path = *LANG_REGEX, message = "Language must be a 2-letter code"))]
    pub lang: String,

    #[serde(default)]
    #[validate(range(min = 0, max = 9999, message = "Display order must be between 0 and 9999"))]
    pub display_order: i32,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for LogoForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            tags: None,
            lang: "EN".to_string(),
            display_order: 0,
            is_active: true,
        }
    }
}

impl From<&Logo> for LogoForm {
    fn from(logo: &Logo) -> Self {
        Self {
            name: logo.name.clone(),
            url: logo.url.clone(),
            tags: logo.tags.clone(),
            lang: logo.lang.clone().unwrap_or_default(),
            display_order: logo.display_order,
            is_active: logo.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct LogoSearch {
    /// Substring of the logo name
    pub name: Option<String>,
    /// Exact language code
    pub lang: Option<String>,
    /// Substring of the tag list
    pub tags: Option<String>,
    /// `true`, `false`, anything else matches both
    pub is_active: Option<String>,
}

impl SearchFilter<Logo> for LogoSearch {
    fn is_empty(&self) -> bool {
        criterion(&self.name).is_none()
            && criterion(&self.lang).is_none()
            && criterion(&self.tags).is_none()
            && flag_filter(&self.is_active).is_none()
    }

    fn matches(&self, logo: &Logo) -> bool {
        contains_ci(Some(logo.name.as_str()), &self.name)
            && equals_ci(logo.lang.as_deref(), &self.lang)
            && contains_ci(logo.tags.as_deref(), &self.tags)
            && flag_matches(logo.is_active, &self.is_active)
    }
}
