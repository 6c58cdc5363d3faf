use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{Application, ApplicationId, ProgramId};
use super::messages::{NoteUpdateMessage, StatusUpdateMessage};
use super::repository::{
    ApplicationRepository, RepositoryError, StatusNotification, StatusNotifier, StatusWrite,
};
use crate::applicant::{summarize_answers, AnswerData};
use crate::program::{LocalizedStrings, ProgramDefinition};

/// Everything the review page needs for one application.
#[derive(Debug, Clone)]
pub struct ApplicationReview {
    pub program: ProgramDefinition,
    pub application: Application,
    pub applicant_label: String,
    pub answers: Vec<AnswerData>,
}

#[derive(Debug, Clone)]
pub struct StatusUpdateOutcome {
    pub application: Application,
    pub email_sent: bool,
}

/// Service behind the program admin review page and its modal actions.
pub struct ProgramAdminService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> ProgramAdminService<R, N>
where
    R: ApplicationRepository + 'static,
    N: StatusNotifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Load a program and one of its applications, with answers summarized for display.
    pub fn review(
        &self,
        program_id: ProgramId,
        application_id: ApplicationId,
    ) -> Result<ApplicationReview, AdminServiceError> {
        let program = self
            .repository
            .program(program_id)?
            .ok_or(AdminServiceError::ProgramNotFound(program_id))?;
        let application = self.application_in_program(program_id, application_id)?;

        let answers = summarize_answers(
            &program.blocks,
            &application.applicant.data,
            application.submitted_at,
        );
        let applicant_label = application.applicant_label();

        Ok(ApplicationReview {
            program,
            application,
            applicant_label,
            answers,
        })
    }

    /// Move an application to a new program status, optionally emailing the applicant.
    pub fn update_status(
        &self,
        message: &StatusUpdateMessage,
    ) -> Result<StatusUpdateOutcome, AdminServiceError> {
        let program = self
            .repository
            .program(message.program_id)?
            .ok_or(AdminServiceError::ProgramNotFound(message.program_id))?;
        let status = program
            .statuses
            .find(&message.new_status)
            .ok_or_else(|| AdminServiceError::UnknownStatus(message.new_status.clone()))?;

        let mut application =
            self.application_in_program(message.program_id, message.application_id)?;
        if application.is_archived() {
            return Err(AdminServiceError::Archived(application.id));
        }

        let stored = application.latest_status.clone().unwrap_or_default();
        if stored != message.current_status {
            return Err(AdminServiceError::StaleStatus {
                expected: message.current_status.clone(),
                found: stored,
            });
        }

        let expected = application.latest_status.clone();
        application.latest_status = Some(status.status_text.clone());
        if let StatusWrite::Conflict { found } = self
            .repository
            .update_if_status(application.clone(), expected.as_deref())?
        {
            return Err(AdminServiceError::StaleStatus {
                expected: message.current_status.clone(),
                found: found.unwrap_or_default(),
            });
        }
        info!(
            program_id = %message.program_id,
            application_id = %message.application_id,
            status = %status.status_text,
            "application status updated"
        );

        let mut email_sent = false;
        if message.send_email {
            let body = status.email_body(LocalizedStrings::DEFAULT_LOCALE);
            if let (Some(body), Some(recipient)) = (body, application.applicant_email()) {
                let notification = StatusNotification {
                    program_id: message.program_id,
                    application_id: message.application_id,
                    recipient: recipient.to_string(),
                    status_text: status.status_text.clone(),
                    body: body.to_string(),
                };
                match self.notifier.notify(notification) {
                    Ok(()) => email_sent = true,
                    Err(error) => warn!(
                        application_id = %message.application_id,
                        error = %error,
                        "status email not sent"
                    ),
                }
            } else {
                debug!(
                    application_id = %message.application_id,
                    has_email_content = body.is_some(),
                    "status email skipped"
                );
            }
        }

        Ok(StatusUpdateOutcome {
            application,
            email_sent,
        })
    }

    /// Replace the admin note on an application. Blank notes clear it.
    pub fn update_note(
        &self,
        message: &NoteUpdateMessage,
    ) -> Result<Application, AdminServiceError> {
        let mut application =
            self.application_in_program(message.program_id, message.application_id)?;
        if application.is_archived() {
            return Err(AdminServiceError::Archived(application.id));
        }

        application.note = Some(message.note.trim())
            .filter(|note| !note.is_empty())
            .map(str::to_string);
        self.repository.update(application.clone())?;
        info!(
            program_id = %message.program_id,
            application_id = %message.application_id,
            cleared = application.note.is_none(),
            "application note updated"
        );

        Ok(application)
    }

    fn application_in_program(
        &self,
        program_id: ProgramId,
        application_id: ApplicationId,
    ) -> Result<Application, AdminServiceError> {
        self.repository
            .fetch(application_id)?
            .filter(|application| application.program_id == program_id)
            .ok_or(AdminServiceError::ApplicationNotFound(application_id))
    }
}

/// Error raised by the program admin service.
#[derive(Debug, thiserror::Error)]
pub enum AdminServiceError {
    #[error("program {0} not found")]
    ProgramNotFound(ProgramId),
    #[error("application {0} not found")]
    ApplicationNotFound(ApplicationId),
    #[error("status `{0}` is not configured for this program")]
    UnknownStatus(String),
    #[error("application status changed from `{expected}` to `{found}` since the page was loaded")]
    StaleStatus { expected: String, found: String },
    #[error("application {0} is archived")]
    Archived(ApplicationId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
