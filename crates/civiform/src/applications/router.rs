use std::sync::Arc;

use axum::{
    extract::{FromRequest, Path, Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ApplicationId, ProgramId};
use super::messages::{AdminFrameMessage, FormKind, NoteUpdateMessage, StatusUpdateMessage};
use super::repository::{ApplicationRepository, StatusNotifier};
use super::service::ProgramAdminService;
use crate::error::AppError;
use crate::routes;
use crate::views::{ApplicationReviewPage, ProgramApplicationView, RequestContext};

const ADMIN_APPLICATION_SCRIPT_SOURCE: &str = include_str!("../../assets/admin_application_view.js");

/// Flash messages carried by the post-update redirect.
pub const STATUS_UPDATED_MESSAGE: &str = "Application status updated";
pub const NOTE_UPDATED_MESSAGE: &str = "Application note updated";

/// Shared state for the review page and its update endpoints.
pub struct AdminState<R, N> {
    service: Arc<ProgramAdminService<R, N>>,
    view: Arc<ProgramApplicationView>,
}

impl<R, N> AdminState<R, N> {
    pub fn new(service: Arc<ProgramAdminService<R, N>>, view: Arc<ProgramApplicationView>) -> Self {
        Self { service, view }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReviewQuery {
    success: Option<String>,
}

/// Router exposing the review page, the update endpoints and the page's script.
pub fn admin_router<R, N>(state: Arc<AdminState<R, N>>) -> Router
where
    R: ApplicationRepository + 'static,
    N: StatusNotifier + 'static,
{
    Router::new()
        .route(routes::APPLICATION_PATTERN, get(review_handler::<R, N>))
        .route(
            routes::UPDATE_STATUS_PATTERN,
            post(update_status_handler::<R, N>),
        )
        .route(routes::UPDATE_NOTE_PATTERN, post(update_note_handler::<R, N>))
        .route(routes::ADMIN_APPLICATION_SCRIPT, get(script_handler))
        .with_state(state)
}

pub(crate) async fn review_handler<R, N>(
    State(state): State<Arc<AdminState<R, N>>>,
    Path((program_id, application_id)): Path<(i64, i64)>,
    Query(query): Query<ReviewQuery>,
    headers: HeaderMap,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: StatusNotifier + 'static,
{
    let review = match state
        .service
        .review(ProgramId(program_id), ApplicationId(application_id))
    {
        Ok(review) => review,
        Err(error) => return AppError::from(error).into_response(),
    };

    let request = RequestContext::from_headers(&headers).with_flash_success(query.success);
    match state
        .view
        .render(&ApplicationReviewPage::from_review(&review), &request)
    {
        Ok(document) => Html(document.to_html()).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn update_status_handler<R, N>(
    State(state): State<Arc<AdminState<R, N>>>,
    Path(path): Path<(i64, i64)>,
    request: Request,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: StatusNotifier + 'static,
{
    match read_message(FormKind::StatusUpdate, request).await {
        Ok(message) => apply_message(&state, path, message),
        Err(response) => response,
    }
}

pub(crate) async fn update_note_handler<R, N>(
    State(state): State<Arc<AdminState<R, N>>>,
    Path(path): Path<(i64, i64)>,
    request: Request,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: StatusNotifier + 'static,
{
    match read_message(FormKind::EditNote, request).await {
        Ok(message) => apply_message(&state, path, message),
        Err(response) => response,
    }
}

/// Decode an update posted either as JSON or as the modal's url-encoded form fields.
async fn read_message(kind: FormKind, request: Request) -> Result<AdminFrameMessage, Response> {
    let is_form = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

    if is_form {
        let Form(fields) = Form::<Vec<(String, String)>>::from_request(request, &())
            .await
            .map_err(IntoResponse::into_response)?;
        return AdminFrameMessage::from_form_fields(kind, &fields)
            .map_err(|error| AppError::BadRequest(error.to_string()).into_response());
    }

    let decoded = match kind {
        FormKind::StatusUpdate => Json::<StatusUpdateMessage>::from_request(request, &())
            .await
            .map(|Json(update)| AdminFrameMessage::UpdateStatus(update)),
        FormKind::EditNote => Json::<NoteUpdateMessage>::from_request(request, &())
            .await
            .map(|Json(note)| AdminFrameMessage::EditNote(note)),
    };
    decoded.map_err(IntoResponse::into_response)
}

fn apply_message<R, N>(
    state: &AdminState<R, N>,
    path: (i64, i64),
    message: AdminFrameMessage,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: StatusNotifier + 'static,
{
    let (program_id, application_id) = message.target();
    if let Err(error) = ensure_ids_match(path, program_id, application_id) {
        return error.into_response();
    }

    match message {
        AdminFrameMessage::UpdateStatus(update) => match state.service.update_status(&update) {
            Ok(outcome) => {
                let payload = json!({
                    "application_id": outcome.application.id,
                    "status": outcome.application.latest_status,
                    "email_sent": outcome.email_sent,
                    "redirect": routes::application_with_success(
                        program_id,
                        application_id,
                        STATUS_UPDATED_MESSAGE,
                    ),
                });
                (StatusCode::OK, Json(payload)).into_response()
            }
            Err(error) => AppError::from(error).into_response(),
        },
        AdminFrameMessage::EditNote(note) => match state.service.update_note(&note) {
            Ok(application) => {
                let payload = json!({
                    "application_id": application.id,
                    "note": application.note,
                    "redirect": routes::application_with_success(
                        program_id,
                        application_id,
                        NOTE_UPDATED_MESSAGE,
                    ),
                });
                (StatusCode::OK, Json(payload)).into_response()
            }
            Err(error) => AppError::from(error).into_response(),
        },
    }
}

pub(crate) async fn script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        ADMIN_APPLICATION_SCRIPT_SOURCE,
    )
}

fn ensure_ids_match(
    path: (i64, i64),
    program_id: ProgramId,
    application_id: ApplicationId,
) -> Result<(), AppError> {
    if path == (program_id.0, application_id.0) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "message targets program {program_id} application {application_id} but was posted to program {} application {}",
            path.0, path.1
        )))
    }
}
