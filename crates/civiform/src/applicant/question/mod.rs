//! Typed accessors over a single question's answer inside [`ApplicantData`].
//!
//! Each accessor checks the question's configured kind when it is built; a mismatch is a
//! [`QuestionTypeError`], which signals misconfiguration rather than bad applicant input.

mod currency;
mod file_upload;
mod number;
mod text;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::data::{ApplicantData, Scalar};
use super::path::Path;
use crate::i18n::{MessageKey, Messages};

pub use currency::CurrencyQuestion;
pub use file_upload::FileUploadQuestion;
pub use number::NumberQuestion;
pub use text::TextQuestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    Currency,
    FileUpload,
    Number,
    Text,
}

impl QuestionType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Currency => "CURRENCY",
            Self::FileUpload => "FILEUPLOAD",
            Self::Number => "NUMBER",
            Self::Text => "TEXT",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValidation {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberValidation {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

/// Question configuration tagged by kind, each variant carrying its own settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Currency,
    FileUpload,
    Number(NumberValidation),
    Text(TextValidation),
}

impl QuestionKind {
    pub const fn question_type(&self) -> QuestionType {
        match self {
            Self::Currency => QuestionType::Currency,
            Self::FileUpload => QuestionType::FileUpload,
            Self::Number(_) => QuestionType::Number,
            Self::Text(_) => QuestionType::Text,
        }
    }

    /// The scalar this kind stores under its question path.
    pub const fn scalar(&self) -> Scalar {
        match self {
            Self::Currency => Scalar::CurrencyCents,
            Self::FileUpload => Scalar::FileKey,
            Self::Number(_) => Scalar::Number,
            Self::Text(_) => Scalar::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: u64,
    pub name: String,
    /// Segment appended to the applicant root, e.g. `monthly_income`.
    pub path_segment: String,
    pub kind: QuestionKind,
}

impl QuestionDefinition {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        path_segment: impl Into<String>,
        kind: QuestionKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            path_segment: path_segment.into(),
            kind,
        }
    }

    pub const fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }

    pub fn path(&self) -> Path {
        Path::root().join(&self.path_segment)
    }
}

/// Raised when an accessor is built for a question of a different kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Question is not a {expected} question: {path_segment} (type: {found})")]
pub struct QuestionTypeError {
    pub expected: QuestionType,
    pub found: QuestionType,
    pub path_segment: String,
}

/// Localizable validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrorMessage {
    pub key: MessageKey,
    pub args: Vec<String>,
}

impl ValidationErrorMessage {
    pub fn new(key: MessageKey, args: Vec<String>) -> Self {
        Self { key, args }
    }

    pub fn render(&self, messages: &dyn Messages) -> String {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        messages.at(self.key, &args)
    }
}

/// Validation and display contract shared by every typed accessor.
pub trait PresentsErrors {
    fn all_paths(&self) -> Vec<Path>;

    fn question_errors(&self) -> Vec<ValidationErrorMessage>;

    fn type_specific_errors(&self) -> Vec<ValidationErrorMessage>;

    fn has_question_errors(&self) -> bool {
        !self.question_errors().is_empty()
    }

    fn has_type_specific_errors(&self) -> bool {
        !self.type_specific_errors().is_empty()
    }

    fn is_answered(&self) -> bool;

    /// Human readable answer; `-` when unanswered.
    fn answer_string(&self) -> String;
}

/// One question definition bound to one applicant's answers.
#[derive(Debug, Clone)]
pub struct ApplicantQuestion<'a> {
    definition: &'a QuestionDefinition,
    data: &'a ApplicantData,
    context: Path,
}

impl<'a> ApplicantQuestion<'a> {
    pub fn new(definition: &'a QuestionDefinition, data: &'a ApplicantData) -> Self {
        Self {
            definition,
            data,
            context: Path::root(),
        }
    }

    pub fn definition(&self) -> &'a QuestionDefinition {
        self.definition
    }

    pub fn data(&self) -> &'a ApplicantData {
        self.data
    }

    pub fn question_type(&self) -> QuestionType {
        self.definition.question_type()
    }

    pub fn contextualized_path(&self) -> Path {
        self.context.join(&self.definition.path_segment)
    }

    pub(crate) fn ensure_type(&self, expected: QuestionType) -> Result<(), QuestionTypeError> {
        let found = self.question_type();
        if found == expected {
            Ok(())
        } else {
            Err(QuestionTypeError {
                expected,
                found,
                path_segment: self.definition.path_segment.clone(),
            })
        }
    }

    /// Accessor matching the question's configured kind.
    pub fn presenter(&self) -> Box<dyn PresentsErrors + 'a> {
        let question = self.clone();
        match self.definition.kind {
            QuestionKind::Currency => Box::new(CurrencyQuestion::checked(question)),
            QuestionKind::FileUpload => Box::new(FileUploadQuestion::checked(question)),
            QuestionKind::Number(validation) => {
                Box::new(NumberQuestion::checked(question, validation))
            }
            QuestionKind::Text(validation) => Box::new(TextQuestion::checked(question, validation)),
        }
    }

    pub fn is_answered(&self) -> bool {
        self.presenter().is_answered()
    }

    pub fn answer_string(&self) -> String {
        self.presenter().answer_string()
    }

    /// Storage key of an uploaded file, only for file upload questions.
    pub fn file_key(&self) -> Option<String> {
        FileUploadQuestion::new(self.clone())
            .ok()
            .and_then(|question| question.file_key())
    }
}
