use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::currency::Currency;
use super::path::Path;
use super::question::QuestionDefinition;

const UPDATED_AT_KEY: &str = "updated_at";

/// Scalar slots a question may store under its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    CurrencyCents,
    FileKey,
    Number,
    Text,
}

impl Scalar {
    pub const fn key(self) -> &'static str {
        match self {
            Self::CurrencyCents => "currency_cents",
            Self::FileKey => "file_key",
            Self::Number => "number",
            Self::Text => "text",
        }
    }
}

/// Typed stored value. Conversion from raw JSON happens once in [`ApplicantData::from_json`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarValue {
    Currency(Currency),
    FileKey(String),
    Number(i64),
    Text(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ApplicantDataError {
    #[error("applicant data must be a JSON object rooted at 'applicant'")]
    MissingRoot,
    #[error("value at {path} is not a valid {expected}")]
    InvalidScalar { path: Path, expected: &'static str },
    #[error("updated_at at {path} must be epoch milliseconds")]
    InvalidTimestamp { path: Path },
}

/// One applicant's answers keyed by scalar path, plus per-question update times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantData {
    scalars: BTreeMap<Path, ScalarValue>,
    updated_at: BTreeMap<Path, DateTime<Utc>>,
}

impl ApplicantData {
    /// Load the raw answer document, converting every scalar the definitions declare.
    ///
    /// Keys not described by a definition are ignored; a present value of the wrong JSON shape
    /// is an error.
    pub fn from_json(
        document: &Value,
        definitions: &[QuestionDefinition],
    ) -> Result<Self, ApplicantDataError> {
        let root = document
            .get(Path::APPLICANT_ROOT)
            .and_then(Value::as_object)
            .ok_or(ApplicantDataError::MissingRoot)?;

        let mut data = Self::default();
        for definition in definitions {
            let Some(entry) = root.get(&definition.path_segment).and_then(Value::as_object) else {
                continue;
            };
            let question_path = definition.path();
            let scalar = definition.kind.scalar();
            let scalar_path = question_path.join(scalar.key());

            if let Some(raw) = entry.get(scalar.key()).filter(|raw| !raw.is_null()) {
                let value = convert_scalar(scalar, raw).ok_or_else(|| {
                    ApplicantDataError::InvalidScalar {
                        path: scalar_path.clone(),
                        expected: scalar.key(),
                    }
                })?;
                data.scalars.insert(scalar_path, value);
            }

            if let Some(raw) = entry.get(UPDATED_AT_KEY).filter(|raw| !raw.is_null()) {
                let timestamp = raw
                    .as_i64()
                    .and_then(DateTime::<Utc>::from_timestamp_millis)
                    .ok_or_else(|| ApplicantDataError::InvalidTimestamp {
                        path: question_path.join(UPDATED_AT_KEY),
                    })?;
                data.updated_at.insert(question_path, timestamp);
            }
        }

        Ok(data)
    }

    pub fn has_path(&self, path: &Path) -> bool {
        self.scalars.contains_key(path)
    }

    pub fn read_currency(&self, path: &Path) -> Option<Currency> {
        match self.scalars.get(path) {
            Some(ScalarValue::Currency(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn read_text(&self, path: &Path) -> Option<&str> {
        match self.scalars.get(path) {
            Some(ScalarValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn read_number(&self, path: &Path) -> Option<i64> {
        match self.scalars.get(path) {
            Some(ScalarValue::Number(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn read_file_key(&self, path: &Path) -> Option<&str> {
        match self.scalars.get(path) {
            Some(ScalarValue::FileKey(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Last time the question rooted at `question_path` was answered.
    pub fn updated_at(&self, question_path: &Path) -> Option<DateTime<Utc>> {
        self.updated_at.get(question_path).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }
}

fn convert_scalar(scalar: Scalar, raw: &Value) -> Option<ScalarValue> {
    match scalar {
        Scalar::CurrencyCents => {
            let currency = match raw {
                Value::Number(number) => number.as_u64().map(Currency::from_cents),
                Value::String(dollars) => Currency::parse_dollars(dollars).ok(),
                _ => None,
            };
            currency.map(ScalarValue::Currency)
        }
        Scalar::Number => raw.as_i64().map(ScalarValue::Number),
        Scalar::Text => raw.as_str().map(|text| ScalarValue::Text(text.to_string())),
        Scalar::FileKey => raw
            .as_str()
            .filter(|key| !key.trim().is_empty())
            .map(|key| ScalarValue::FileKey(key.to_string())),
    }
}
