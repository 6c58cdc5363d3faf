//! Messages the embedded review page posts to the admin frame that hosts it.
//!
//! Both the modal forms rendered by the review view and the JSON update endpoints use the
//! field names below, so a rename on either side breaks the other at compile time.

use serde::{Deserialize, Serialize};

use super::domain::{ApplicationId, ProgramId};

pub const PROGRAM_ID_FIELD: &str = "programId";
pub const APPLICATION_ID_FIELD: &str = "applicationId";
pub const CURRENT_STATUS_FIELD: &str = "currentStatus";
pub const NEW_STATUS_FIELD: &str = "newStatus";
pub const SEND_EMAIL_FIELD: &str = "sendEmail";
pub const NOTE_FIELD: &str = "note";

/// Status change confirmed in the status-update modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateMessage {
    pub program_id: ProgramId,
    pub application_id: ApplicationId,
    /// Status the admin saw when opening the modal; empty when the application had none.
    #[serde(default)]
    pub current_status: String,
    pub new_status: String,
    #[serde(default)]
    pub send_email: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdateMessage {
    pub program_id: ProgramId,
    pub application_id: ApplicationId,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "messageType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminFrameMessage {
    UpdateStatus(StatusUpdateMessage),
    EditNote(NoteUpdateMessage),
}

/// Which modal form, and so which update endpoint, a submission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    StatusUpdate,
    EditNote,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MessageContractError {
    #[error("missing form field `{0}`")]
    MissingField(&'static str),
    #[error("form field `{field}` is not a valid id: {value}")]
    InvalidId { field: &'static str, value: String },
}

impl AdminFrameMessage {
    /// Program and application the message acts on.
    pub fn target(&self) -> (ProgramId, ApplicationId) {
        match self {
            AdminFrameMessage::UpdateStatus(update) => (update.program_id, update.application_id),
            AdminFrameMessage::EditNote(note) => (note.program_id, note.application_id),
        }
    }

    /// Build a message from submitted form fields.
    ///
    /// Unchecked checkboxes are never submitted, so an absent `sendEmail` means false.
    pub fn from_form_fields(
        kind: FormKind,
        fields: &[(String, String)],
    ) -> Result<Self, MessageContractError> {
        let lookup = |name: &str| {
            fields
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, value)| value.as_str())
        };
        let required =
            |name: &'static str| lookup(name).ok_or(MessageContractError::MissingField(name));
        let id = |name: &'static str| -> Result<i64, MessageContractError> {
            let raw = required(name)?;
            raw.trim()
                .parse::<i64>()
                .map_err(|_| MessageContractError::InvalidId {
                    field: name,
                    value: raw.to_string(),
                })
        };

        let program_id = ProgramId(id(PROGRAM_ID_FIELD)?);
        let application_id = ApplicationId(id(APPLICATION_ID_FIELD)?);

        match kind {
            FormKind::StatusUpdate => Ok(AdminFrameMessage::UpdateStatus(StatusUpdateMessage {
                program_id,
                application_id,
                current_status: lookup(CURRENT_STATUS_FIELD).unwrap_or_default().to_string(),
                new_status: required(NEW_STATUS_FIELD)?.to_string(),
                send_email: matches!(lookup(SEND_EMAIL_FIELD), Some("on" | "true")),
            })),
            FormKind::EditNote => Ok(AdminFrameMessage::EditNote(NoteUpdateMessage {
                program_id,
                application_id,
                note: lookup(NOTE_FIELD).unwrap_or_default().to_string(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn status_form_without_checkbox_does_not_send_email() {
        let message = AdminFrameMessage::from_form_fields(
            FormKind::StatusUpdate,
            &fields(&[
                ("programId", "3"),
                ("applicationId", "17"),
                ("currentStatus", ""),
                ("newStatus", "Approved"),
            ]),
        )
        .expect("valid form");

        assert_eq!(
            message,
            AdminFrameMessage::UpdateStatus(StatusUpdateMessage {
                program_id: ProgramId(3),
                application_id: ApplicationId(17),
                current_status: String::new(),
                new_status: "Approved".to_string(),
                send_email: false,
            })
        );
    }

    #[test]
    fn checked_checkbox_sends_email() {
        let message = AdminFrameMessage::from_form_fields(
            FormKind::StatusUpdate,
            &fields(&[
                ("programId", "3"),
                ("applicationId", "17"),
                ("newStatus", "Approved"),
                ("sendEmail", "on"),
            ]),
        )
        .expect("valid form");

        match message {
            AdminFrameMessage::UpdateStatus(update) => assert!(update.send_email),
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[test]
    fn serializes_with_message_type_tag() {
        let message = AdminFrameMessage::EditNote(NoteUpdateMessage {
            program_id: ProgramId(1),
            application_id: ApplicationId(2),
            note: "Called applicant".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&message).expect("serializes"),
            json!({
                "messageType": "EDIT_NOTE",
                "programId": 1,
                "applicationId": 2,
                "note": "Called applicant",
            })
        );
        assert_eq!(message.target(), (ProgramId(1), ApplicationId(2)));
    }

    #[test]
    fn rejects_missing_and_malformed_ids() {
        assert_eq!(
            AdminFrameMessage::from_form_fields(FormKind::EditNote, &fields(&[("note", "x")])),
            Err(MessageContractError::MissingField(PROGRAM_ID_FIELD))
        );
        assert_eq!(
            AdminFrameMessage::from_form_fields(
                FormKind::EditNote,
                &fields(&[("programId", "abc"), ("applicationId", "1")])
            ),
            Err(MessageContractError::InvalidId {
                field: PROGRAM_ID_FIELD,
                value: "abc".to_string(),
            })
        );
    }
}
