use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::applicant::ApplicantData;

/// Identifier wrapper for programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProgramId(pub i64);

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(pub i64);

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Login account backing an applicant. Guests have no email address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Applicant {
    pub name: Option<String>,
    pub account: Account,
    pub data: ApplicantData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStage {
    Active,
    Archived,
}

/// An applicant's submission to one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub id: ApplicationId,
    pub program_id: ProgramId,
    pub applicant: Applicant,
    pub latest_status: Option<String>,
    pub note: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub lifecycle: LifecycleStage,
}

impl Application {
    pub const ANONYMOUS_APPLICANT: &'static str = "<Anonymous Applicant>";

    /// `"<applicant name> (<application id>)"` as shown to program admins.
    pub fn applicant_label(&self) -> String {
        let name = self
            .applicant
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(Self::ANONYMOUS_APPLICANT);
        format!("{name} ({})", self.id)
    }

    /// Applicant's email exactly as stored; blank values count as absent.
    pub fn applicant_email(&self) -> Option<&str> {
        self.applicant
            .account
            .email_address
            .as_deref()
            .filter(|email| !email.trim().is_empty())
    }

    pub fn is_archived(&self) -> bool {
        self.lifecycle == LifecycleStage::Archived
    }
}
