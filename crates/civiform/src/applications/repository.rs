use serde::{Deserialize, Serialize};

use super::domain::{Application, ApplicationId, ProgramId};
use crate::program::ProgramDefinition;

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ApplicationRepository: Send + Sync {
    fn program(&self, id: ProgramId) -> Result<Option<ProgramDefinition>, RepositoryError>;
    fn fetch(&self, id: ApplicationId) -> Result<Option<Application>, RepositoryError>;
    fn update(&self, application: Application) -> Result<(), RepositoryError>;
    /// Store `application` only if the stored status still equals `expected`.
    /// The comparison and the write must happen as one step.
    fn update_if_status(
        &self,
        application: Application,
        expected: Option<&str>,
    ) -> Result<StatusWrite, RepositoryError>;
}

/// Outcome of a conditional status write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusWrite {
    Applied,
    Conflict { found: Option<String> },
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook for applicant status emails. Delivery itself happens elsewhere.
pub trait StatusNotifier: Send + Sync {
    fn notify(&self, notification: StatusNotification) -> Result<(), NotifierError>;
}

/// Email request produced when an admin opts in to notifying the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusNotification {
    pub program_id: ProgramId,
    pub application_id: ApplicationId,
    pub recipient: String,
    pub status_text: String,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
