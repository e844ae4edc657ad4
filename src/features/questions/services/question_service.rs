use crate::features::questions::dtos::{QuestionForm, QuestionSearch};
use crate::features::questions::models::FillBlankQuestion;
use crate::shared::crud::{CrudService, FieldErrors, FormMode, Resource};
use crate::shared::validation::{normalize_tags, trim, trim_opt, BLANK_MARKER_REGEX};

pub struct QuestionResource;

impl Resource for QuestionResource {
    type Item = FillBlankQuestion;
    type Form = QuestionForm;
    type Search = QuestionSearch;

    const NAME: &'static str = "Question";
    const PATH: &'static str = "/v1/fill-blank-question-rus";
    const FORM_FIELDS: &'static [&'static str] = &[
        "question",
        "answer",
        "explanation",
        "difficultyLevel",
        "tags",
        "lang",
        "displayOrder",
        "isActive",
    ];

    fn item_id(q: &FillBlankQuestion) -> i64 {
        q.id
    }

    fn form_from_item(q: &FillBlankQuestion) -> QuestionForm {
        QuestionForm::from(q)
    }

    fn normalize(form: QuestionForm) -> QuestionForm {
        QuestionForm {
            question: trim(form.question),
            answer: trim(form.answer),
            explanation: trim_opt(form.explanation),
            difficulty_level: trim_opt(form.difficulty_level),
            tags: normalize_tags(form.tags),
            lang: trim(form.lang),
            ..form
        }
    }

    fn check_rules(form: &QuestionForm, _mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !form.question.is_empty() && !BLANK_MARKER_REGEX.is_match(&form.question) {
            errors.insert("question", "Question must contain a blank (___)");
        }
        errors
    }
}

pub type QuestionService = CrudService<QuestionResource>;
