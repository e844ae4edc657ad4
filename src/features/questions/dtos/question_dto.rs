use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::questions::models::FillBlankQuestion;
use crate::shared::crud::{contains_ci, criterion, equals_ci, flag_filter, flag_matches, SearchFilter};
use crate::shared::validation::LANG_REGEX;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionForm {
    #[validate(length(min = 1, max = 2000, message = "Question must be 1-2000 characters"))]
    pub question: String,

    #[validate(length(min = 1, max = 500, message = "Answer must be 1-500 characters"))]
    pub answer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000, message = "Explanation must not exceed 2000 characters"))]
    pub explanation: Option<String>,

    /// One of the `difficulty_level` setting options
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

impl Default for QuestionForm {
    fn default() -> Self {
        Self {
            question: String::new(),
            answer: String::new(),
            explanation: None,
            difficulty_level: None,
            tags: None,
            lang: "RU".to_string(),
            display_order: 0,
            is_active: true,
        }
    }
}

impl From<&FillBlankQuestion> for QuestionForm {
    fn from(q: &FillBlankQuestion) -> Self {
        Self {
            question: q.question.clone(),
            answer: q.answer.clone(),
            explanation: q.explanation.clone(),
            difficulty_level: q.difficulty_level.clone(),
            tags: q.tags.clone(),
            lang: q.lang.clone().unwrap_or_default(),
            display_order: q.display_order,
            is_active: q.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSearch {
    /// Substring of the question text
    pub question: Option<String>,
    /// Substring of the answer
    pub answer: Option<String>,
    pub difficulty_level: Option<String>,
    pub lang: Option<String>,
    pub tags: Option<String>,
    pub is_active: Option<String>,
}

impl SearchFilter<FillBlankQuestion> for QuestionSearch {
    fn is_empty(&self) -> bool {
        criterion(&self.question).is_none()
            && criterion(&self.answer).is_none()
            && criterion(&self.difficulty_level).is_none()
            && criterion(&self.lang).is_none()
            && criterion(&self.tags).is_none()
            && flag_filter(&self.is_active).is_none()
    }

    fn matches(&self, q: &FillBlankQuestion) -> bool {
        contains_ci(Some(q.question.as_str()), &self.question)
            && contains_ci(Some(q.answer.as_str()), &self.answer)
            && equals_ci(q.difficulty_level.as_deref(), &self.difficulty_level)
            && equals_ci(q.lang.as_deref(), &self.lang)
            && contains_ci(q.tags.as_deref(), &self.tags)
            && flag_matches(q.is_active, &self.is_active)
    }
}
