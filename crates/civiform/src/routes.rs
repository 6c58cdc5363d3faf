//! URL builders for the endpoints the views link to.

use crate::applications::{ApplicationId, ProgramId};
use crate::auth::{FakeAdminClient, FakeAdminRole};

pub const LOGIN: &str = "/login";
pub const APPLICANT_LOGIN: &str = "/applicantLogin";
pub const ADMIN_LOGIN: &str = "/adminLogin";
pub const REGISTER: &str = "/register";
pub const ADMIN_APPLICATION_SCRIPT: &str = "/assets/admin_application_view.js";
pub const LOCAL_IMAGE_ROOT: &str = "/assets/images";

pub const APPLICATION_PATTERN: &str = "/admin/programs/:program_id/applications/:application_id";
pub const UPDATE_STATUS_PATTERN: &str =
    "/admin/programs/:program_id/applications/:application_id/updateStatus";
pub const UPDATE_NOTE_PATTERN: &str =
    "/admin/programs/:program_id/applications/:application_id/updateNote";

pub fn callback(client_name: &str) -> String {
    format!("/callback/{client_name}")
}

pub fn guest_callback() -> String {
    callback("GuestClient")
}

pub fn fake_admin_callback(role: FakeAdminRole) -> String {
    format!(
        "{}?adminType={}",
        callback(FakeAdminClient::CLIENT_NAME),
        role.callback_value()
    )
}

pub fn application(program_id: ProgramId, application_id: ApplicationId) -> String {
    format!("/admin/programs/{program_id}/applications/{application_id}")
}

/// Review page URL carrying a success flash message.
pub fn application_with_success(
    program_id: ProgramId,
    application_id: ApplicationId,
    message: &str,
) -> String {
    format!(
        "{}?success={}",
        application(program_id, application_id),
        encode_component(message)
    )
}

pub fn application_download(program_id: ProgramId, application_id: ApplicationId) -> String {
    format!("{}/download", application(program_id, application_id))
}

pub fn admin_file(program_id: ProgramId, encoded_file_key: &str) -> String {
    format!("/admin/programs/{program_id}/files/{encoded_file_key}")
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_admin_urls() {
        assert_eq!(
            application_download(ProgramId(3), ApplicationId(12)),
            "/admin/programs/3/applications/12/download"
        );
        assert_eq!(
            application_with_success(ProgramId(3), ApplicationId(12), "Note saved"),
            "/admin/programs/3/applications/12?success=Note%20saved"
        );
        assert_eq!(
            admin_file(ProgramId(3), &encode_component("applicant-7/lease 2024.pdf")),
            "/admin/programs/3/files/applicant-7%2Flease%202024.pdf"
        );
        assert_eq!(
            fake_admin_callback(FakeAdminRole::DualAdmin),
            "/callback/FakeAdminClient?adminType=DUAL"
        );
    }
}
