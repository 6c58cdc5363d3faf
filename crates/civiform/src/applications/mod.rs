//! Program admin review workflow: the application model, storage and notification seams,
//! the service enforcing status and note rules, and the HTTP surface the review page uses.

pub mod domain;
pub mod messages;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Account, Applicant, Application, ApplicationId, LifecycleStage, ProgramId};
pub use messages::{
    AdminFrameMessage, FormKind, MessageContractError, NoteUpdateMessage, StatusUpdateMessage,
};
pub use repository::{
    ApplicationRepository, NotifierError, RepositoryError, StatusNotification, StatusNotifier,
    StatusWrite,
};
pub use router::{admin_router, AdminState, NOTE_UPDATED_MESSAGE, STATUS_UPDATED_MESSAGE};
pub use service::{AdminServiceError, ApplicationReview, ProgramAdminService, StatusUpdateOutcome};
