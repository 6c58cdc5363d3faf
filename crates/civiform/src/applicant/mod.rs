pub mod currency;
pub mod data;
pub mod path;
pub mod question;
pub mod summary;

pub use currency::{Currency, CurrencyParseError};
pub use data::{ApplicantData, ApplicantDataError, Scalar, ScalarValue};
pub use path::Path;
pub use question::{
    ApplicantQuestion, CurrencyQuestion, FileUploadQuestion, NumberQuestion, NumberValidation,
    PresentsErrors, QuestionDefinition, QuestionKind, QuestionType, QuestionTypeError,
    TextQuestion, TextValidation, ValidationErrorMessage,
};
pub use summary::{summarize_answers, AnswerData};
