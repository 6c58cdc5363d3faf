use super::{ApplicantQuestion, PresentsErrors, QuestionType, QuestionTypeError, ValidationErrorMessage};
use crate::applicant::data::Scalar;
use crate::applicant::path::Path;

#[derive(Debug)]
pub struct FileUploadQuestion<'a> {
    question: ApplicantQuestion<'a>,
}

impl<'a> FileUploadQuestion<'a> {
    pub fn new(question: ApplicantQuestion<'a>) -> Result<Self, QuestionTypeError> {
        question.ensure_type(QuestionType::FileUpload)?;
        Ok(Self::checked(question))
    }

    pub(super) fn checked(question: ApplicantQuestion<'a>) -> Self {
        Self { question }
    }

    pub fn file_key_path(&self) -> Path {
        self.question.contextualized_path().join(Scalar::FileKey.key())
    }

    pub fn file_key(&self) -> Option<String> {
        self.question
            .data()
            .read_file_key(&self.file_key_path())
            .map(str::to_string)
    }

    /// Last segment of the storage key.
    pub fn file_name(&self) -> Option<String> {
        self.file_key().map(|key| match key.rsplit_once('/') {
            Some((_, name)) => name.to_string(),
            None => key,
        })
    }
}

impl PresentsErrors for FileUploadQuestion<'_> {
    fn all_paths(&self) -> Vec<Path> {
        vec![self.file_key_path()]
    }

    fn question_errors(&self) -> Vec<ValidationErrorMessage> {
        Vec::new()
    }

    fn type_specific_errors(&self) -> Vec<ValidationErrorMessage> {
        Vec::new()
    }

    fn is_answered(&self) -> bool {
        self.question.data().has_path(&self.file_key_path())
    }

    fn answer_string(&self) -> String {
        self.file_name().unwrap_or_else(|| "-".to_string())
    }
}
