use std::fmt;

use serde::{Deserialize, Serialize};

/// Dot-separated location inside the applicant answer store, e.g. `applicant.income.currency_cents`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Path(String);

impl Path {
    pub const APPLICANT_ROOT: &'static str = "applicant";

    pub fn root() -> Self {
        Self(Self::APPLICANT_ROOT.to_string())
    }

    pub fn parse(raw: &str) -> Self {
        let segments: Vec<&str> = raw
            .split('.')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect();
        Self(segments.join("."))
    }

    pub fn join(&self, segment: &str) -> Self {
        if self.0.is_empty() {
            Self(segment.to_string())
        } else {
            Self(format!("{}.{}", self.0, segment))
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|segment| !segment.is_empty())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
