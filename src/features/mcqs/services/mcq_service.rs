use crate::features::mcqs::dtos::{McqForm, McqSearch};
use crate::features::mcqs::models::Mcq;
use crate::shared::constants::MCQ_OPTION_LETTERS;
use crate::shared::crud::{CrudService, FieldErrors, FormMode, Resource};
use crate::shared::validation::{normalize_tags, trim, trim_opt};

pub struct McqResource;

/// Upper-case, de-duplicate and order the answer letters.
/// Entries that are not a single option letter are kept so validation can
/// report them.
fn normalize_answers(raw: &str) -> String {
    let mut letters: Vec<String> = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let entry = entry.to_uppercase();
        if !letters.contains(&entry) {
            letters.push(entry);
        }
    }
    letters.sort_by_key(|l| {
        MCQ_OPTION_LETTERS
            .iter()
            .position(|known| known == l)
            .unwrap_or(MCQ_OPTION_LETTERS.len())
    });
    letters.join(",")
}

impl Resource for McqResource {
    type Item = Mcq;
    type Form = McqForm;
    type Search = McqSearch;

    const NAME: &'static str = "MCQ";
    const PATH: &'static str = "/v1/ru/mcqs";
    const FORM_FIELDS: &'static [&'static str] = &[
        "question",
        "optionA",
        "optionB",
        "optionC",
        "optionD",
        "correctAnswers",
        "isMultipleCorrect",
        "explanation",
        "difficultyLevel",
        "tags",
        "lang",
        "displayOrder",
        "isActive",
    ];

    fn item_id(mcq: &Mcq) -> i64 {
        mcq.id
    }

    fn form_from_item(mcq: &Mcq) -> McqForm {
        McqForm::from(mcq)
    }

    fn normalize(form: McqForm) -> McqForm {
        McqForm {
            question: trim(form.question),
            option_a: trim_opt(form.option_a),
            option_b: trim_opt(form.option_b),
            option_c: trim_opt(form.option_c),
            option_d: trim_opt(form.option_d),
            correct_answers: normalize_answers(&form.correct_answers),
            explanation: trim_opt(form.explanation),
            difficulty_level: trim_opt(form.difficulty_level),
            tags: normalize_tags(form.tags),
            lang: trim(form.lang),
            ..form
        }
    }

    fn check_rules(form: &McqForm, _mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let options = form.options();

        if options.iter().filter(|o| o.is_some()).count() < 2 {
            errors.insert("optionA", "At least two options are required");
        }

        let answers: Vec<&str> = form
            .correct_answers
            .split(',')
            .filter(|s| !s.is_empty())
            .collect();

        if answers.is_empty() {
            errors.insert("correctAnswers", "Select at least one correct answer");
            return errors;
        }

        for answer in &answers {
            match MCQ_OPTION_LETTERS.iter().position(|l| l == answer) {
                None => {
                    errors.insert(
                        "correctAnswers",
                        format!("'{}' is not an option letter (A-D)", answer),
                    );
                }
                Some(i) if options[i].is_none() => {
                    errors.insert(
                        "correctAnswers",
                        format!("Option {} is empty and cannot be correct", answer),
                    );
                }
                Some(_) => {}
            }
        }

        if !form.is_multiple_correct && answers.len() > 1 {
            errors.insert(
                "correctAnswers",
                "Only one correct answer is allowed unless multiple answers are enabled",
            );
        }

        errors
    }
}

pub type McqService = CrudService<McqResource>;

#[cfg(test)]
mod tests {
    use super::*;

    fn form(answers: &str, multiple: bool) -> McqForm {
        McqResource::normalize(McqForm {
            question: "Столица России?".to_string(),
            option_a: Some("Москва".to_string()),
            option_b: Some("Казань".to_string()),
            option_c: Some("  ".to_string()),
            option_d: None,
            correct_answers: answers.to_string(),
            is_multiple_correct: multiple,
            ..Default::default()
        })
    }

    #[test]
    fn test_answers_are_normalised() {
        assert_eq!(normalize_answers(" b, a ,A,, d"), "A,B,D");
        assert_eq!(normalize_answers(""), "");
    }

    #[test]
    fn test_single_answer_accepted() {
        let errors = McqResource::validate_form(&form("a", false), FormMode::Create);
        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn test_multiple_answers_need_flag() {
        let errors = McqResource::validate_form(&form("A,B", false), FormMode::Create);
        assert!(errors.contains("correctAnswers"));

        let errors = McqResource::validate_form(&form("A,B", true), FormMode::Create);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_answer_must_reference_filled_option() {
        // option C is blank after trimming
        let errors = McqResource::validate_form(&form("C", false), FormMode::Create);
        assert_eq!(
            errors.get("correctAnswers"),
            Some("Option C is empty and cannot be correct")
        );

        let errors = McqResource::validate_form(&form("E", false), FormMode::Create);
        assert_eq!(
            errors.get("correctAnswers"),
            Some("'E' is not an option letter (A-D)")
        );
    }

    #[test]
    fn test_missing_answer_and_options() {
        let mut f = form("", false);
        f.option_b = None;
        let errors = McqResource::validate_form(&f, FormMode::Create);
        assert_eq!(errors.get("correctAnswers"), Some("Select at least one correct answer"));
        assert_eq!(errors.get("optionA"), Some("At least two options are required"));
    }
}
