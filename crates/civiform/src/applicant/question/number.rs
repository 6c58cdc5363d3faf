use std::cell::OnceCell;

use super::{
    ApplicantQuestion, NumberValidation, PresentsErrors, QuestionKind, QuestionType,
    QuestionTypeError, ValidationErrorMessage,
};
use crate::applicant::data::Scalar;
use crate::applicant::path::Path;
use crate::i18n::MessageKey;

#[derive(Debug)]
pub struct NumberQuestion<'a> {
    question: ApplicantQuestion<'a>,
    validation: NumberValidation,
    value: OnceCell<Option<i64>>,
}

impl<'a> NumberQuestion<'a> {
    pub fn new(question: ApplicantQuestion<'a>) -> Result<Self, QuestionTypeError> {
        question.ensure_type(QuestionType::Number)?;
        let validation = match question.definition().kind {
            QuestionKind::Number(validation) => validation,
            _ => NumberValidation::default(),
        };
        Ok(Self::checked(question, validation))
    }

    pub(super) fn checked(question: ApplicantQuestion<'a>, validation: NumberValidation) -> Self {
        Self {
            question,
            validation,
            value: OnceCell::new(),
        }
    }

    pub fn number_path(&self) -> Path {
        self.question.contextualized_path().join(Scalar::Number.key())
    }

    pub fn value(&self) -> Option<i64> {
        *self
            .value
            .get_or_init(|| self.question.data().read_number(&self.number_path()))
    }
}

impl PresentsErrors for NumberQuestion<'_> {
    fn all_paths(&self) -> Vec<Path> {
        vec![self.number_path()]
    }

    fn question_errors(&self) -> Vec<ValidationErrorMessage> {
        let Some(value) = self.value() else {
            return Vec::new();
        };

        match (self.validation.min, self.validation.max) {
            (Some(min), _) if value < min => vec![ValidationErrorMessage::new(
                MessageKey::NumberTooSmall,
                vec![min.to_string()],
            )],
            (_, Some(max)) if value > max => vec![ValidationErrorMessage::new(
                MessageKey::NumberTooLarge,
                vec![max.to_string()],
            )],
            _ => Vec::new(),
        }
    }

    fn type_specific_errors(&self) -> Vec<ValidationErrorMessage> {
        Vec::new()
    }

    fn is_answered(&self) -> bool {
        self.question.data().has_path(&self.number_path())
    }

    fn answer_string(&self) -> String {
        self.value()
            .map(|value| value.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}
