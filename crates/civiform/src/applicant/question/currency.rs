use std::cell::OnceCell;

use super::{ApplicantQuestion, PresentsErrors, QuestionTypeError, ValidationErrorMessage};
use crate::applicant::currency::Currency;
use crate::applicant::data::Scalar;
use crate::applicant::path::Path;
use crate::applicant::question::QuestionType;

/// Currency question in the context of a specific applicant.
///
/// The value is read from the store once and cached for the life of the accessor. The cache
/// is not `Sync`; an accessor belongs to a single request.
#[derive(Debug)]
pub struct CurrencyQuestion<'a> {
    question: ApplicantQuestion<'a>,
    value: OnceCell<Option<Currency>>,
}

impl<'a> CurrencyQuestion<'a> {
    pub fn new(question: ApplicantQuestion<'a>) -> Result<Self, QuestionTypeError> {
        question.ensure_type(QuestionType::Currency)?;
        Ok(Self::checked(question))
    }

    pub(super) fn checked(question: ApplicantQuestion<'a>) -> Self {
        Self {
            question,
            value: OnceCell::new(),
        }
    }

    pub fn currency_path(&self) -> Path {
        self.question
            .contextualized_path()
            .join(Scalar::CurrencyCents.key())
    }

    pub fn value(&self) -> Option<Currency> {
        *self
            .value
            .get_or_init(|| self.question.data().read_currency(&self.currency_path()))
    }
}

impl PresentsErrors for CurrencyQuestion<'_> {
    fn all_paths(&self) -> Vec<Path> {
        vec![self.currency_path()]
    }

    fn question_errors(&self) -> Vec<ValidationErrorMessage> {
        Vec::new()
    }

    // Currency has no format rules beyond what loading the store already enforces.
    fn type_specific_errors(&self) -> Vec<ValidationErrorMessage> {
        Vec::new()
    }

    fn is_answered(&self) -> bool {
        self.question.data().has_path(&self.currency_path())
    }

    fn answer_string(&self) -> String {
        self.value()
            .map(Currency::dollars_string)
            .unwrap_or_else(|| "-".to_string())
    }
}
