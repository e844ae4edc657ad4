use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::mcqs::models::Mcq;
use crate::shared::crud::{contains_ci, criterion, equals_ci, flag_filter, flag_matches, SearchFilter};
use crate::shared::validation::LANG_REGEX;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct McqForm {
    #[validate(length(min = 1, max = 2000, message = "Question must be 1-2000 characters"))]
    pub question: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Option A must not exceed 500 characters"))]
    pub option_a: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Option B must not exceed 500 characters"))]
    pub option_b: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Option C must not exceed 500 characters"))]
    pub option_c: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Option D must not exceed 500 characters"))]
    pub option_d: Option<String>,

    /// Comma-joined letters from A to D
    #[serde(default)]
    pub correct_answers: String,

    #[serde(default)]
    pub is_multiple_correct: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000, message = "Explanation must not exceed 2000 characters"))]
    pub explanation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 50, message = "Difficulty level must not exceed 50 characters"))]
    pub difficulty_level: Option<String>,

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

impl Default for McqForm {
    fn default() -> Self {
        Self {
            question: String::new(),
            option_a: None,
            option_b: None,
            option_c: None,
            option_d: None,
            correct_answers: String::new(),
            is_multiple_correct: false,
            explanation: None,
            difficulty_level: None,
            tags: None,
            lang: "RU".to_string(),
            display_order: 0,
            is_active: true,
        }
    }
}

impl McqForm {
    /// Options in letter order
    pub fn options(&self) -> [Option<&str>; 4] {
        [
            self.option_a.as_deref(),
            self.option_b.as_deref(),
            self.option_c.as_deref(),
            self.option_d.as_deref(),
        ]
    }
}

impl From<&Mcq> for McqForm {
    fn from(mcq: &Mcq) -> Self {
        Self {
            question: mcq.question.clone(),
            option_a: mcq.option_a.clone(),
            option_b: mcq.option_b.clone(),
            option_c: mcq.option_c.clone(),
            option_d: mcq.option_d.clone(),
            correct_answers: mcq.correct_answers.clone(),
            is_multiple_correct: mcq.is_multiple_correct,
            explanation: mcq.explanation.clone(),
            difficulty_level: mcq.difficulty_level.clone(),
            tags: mcq.tags.clone(),
            lang: mcq.lang.clone().unwrap_or_default(),
            display_order: mcq.display_order,
            is_active: mcq.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct McqSearch {
    /// Substring of the question text
    pub question: Option<String>,
    pub difficulty_level: Option<String>,
    pub lang: Option<String>,
    pub tags: Option<String>,
    pub is_active: Option<String>,
}

impl SearchFilter<Mcq> for McqSearch {
    fn is_empty(&self) -> bool {
        criterion(&self.question).is_none()
            && criterion(&self.difficulty_level).is_none()
            && criterion(&self.lang).is_none()
            && criterion(&self.tags).is_none()
            && flag_filter(&self.is_active).is_none()
    }

    fn matches(&self, mcq: &Mcq) -> bool {
        contains_ci(Some(mcq.question.as_str()), &self.question)
            && equals_ci(mcq.difficulty_level.as_deref(), &self.difficulty_level)
            && equals_ci(mcq.lang.as_deref(), &self.lang)
            && contains_ci(mcq.tags.as_deref(), &self.tags)
            && flag_matches(mcq.is_active, &self.is_active)
    }
}
