use std::cell::OnceCell;

use super::{
    ApplicantQuestion, PresentsErrors, QuestionType, QuestionTypeError, TextValidation,
    ValidationErrorMessage,
};
use crate::applicant::data::Scalar;
use crate::applicant::path::Path;
use crate::i18n::MessageKey;

#[derive(Debug)]
pub struct TextQuestion<'a> {
    question: ApplicantQuestion<'a>,
    validation: TextValidation,
    value: OnceCell<Option<String>>,
}

impl<'a> TextQuestion<'a> {
    pub fn new(question: ApplicantQuestion<'a>) -> Result<Self, QuestionTypeError> {
        question.ensure_type(QuestionType::Text)?;
        let validation = match question.definition().kind {
            super::QuestionKind::Text(validation) => validation,
            _ => TextValidation::default(),
        };
        Ok(Self::checked(question, validation))
    }

    pub(super) fn checked(question: ApplicantQuestion<'a>, validation: TextValidation) -> Self {
        Self {
            question,
            validation,
            value: OnceCell::new(),
        }
    }

    pub fn text_path(&self) -> Path {
        self.question.contextualized_path().join(Scalar::Text.key())
    }

    pub fn value(&self) -> Option<&str> {
        self.value
            .get_or_init(|| {
                self.question
                    .data()
                    .read_text(&self.text_path())
                    .map(str::to_string)
            })
            .as_deref()
    }
}

impl PresentsErrors for TextQuestion<'_> {
    fn all_paths(&self) -> Vec<Path> {
        vec![self.text_path()]
    }

    fn question_errors(&self) -> Vec<ValidationErrorMessage> {
        let Some(value) = self.value() else {
            return Vec::new();
        };
        let length = value.chars().count();
        let mut errors = Vec::new();

        if let Some(min) = self.validation.min_length {
            if length < min {
                errors.push(ValidationErrorMessage::new(
                    MessageKey::TextTooShort,
                    vec![min.to_string()],
                ));
            }
        }
        if let Some(max) = self.validation.max_length {
            if length > max {
                errors.push(ValidationErrorMessage::new(
                    MessageKey::TextTooLong,
                    vec![max.to_string()],
                ));
            }
        }
        errors
    }

    fn type_specific_errors(&self) -> Vec<ValidationErrorMessage> {
        Vec::new()
    }

    fn is_answered(&self) -> bool {
        self.question.data().has_path(&self.text_path())
    }

    fn answer_string(&self) -> String {
        self.value().unwrap_or("-").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicant::data::ApplicantData;
    use crate::applicant::question::{QuestionDefinition, QuestionKind};
    use serde_json::json;

    fn nickname() -> QuestionDefinition {
        QuestionDefinition::new(
            21,
            "Nickname",
            "nickname",
            QuestionKind::Text(TextValidation {
                min_length: Some(2),
                max_length: Some(4),
            }),
        )
    }

    fn question_errors_for(value: &str) -> Vec<MessageKey> {
        let definition = nickname();
        let data = ApplicantData::from_json(
            &json!({ "applicant": { "nickname": { "text": value } } }),
            std::slice::from_ref(&definition),
        )
        .expect("data loads");
        let question =
            TextQuestion::new(ApplicantQuestion::new(&definition, &data)).expect("text question");
        question
            .question_errors()
            .into_iter()
            .map(|error| error.key)
            .collect()
    }

    #[test]
    fn enforces_length_bounds() {
        assert_eq!(question_errors_for("B"), vec![MessageKey::TextTooShort]);
        assert!(question_errors_for("Bob").is_empty());
        assert_eq!(question_errors_for("Bobby"), vec![MessageKey::TextTooLong]);
    }

    #[test]
    fn unanswered_text_has_no_errors() {
        let definition = nickname();
        let data = ApplicantData::default();
        let question =
            TextQuestion::new(ApplicantQuestion::new(&definition, &data)).expect("text question");
        assert!(!question.has_question_errors());
        assert_eq!(question.answer_string(), "-");
    }
}
