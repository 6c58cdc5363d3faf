use crate::applicant::ApplicantDataError;
use crate::applications::{AdminServiceError, RepositoryError};
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::views::ViewError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Admin(AdminServiceError),
    View(ViewError),
    Data(ApplicantDataError),
    BadRequest(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Admin(err) => match err {
                AdminServiceError::ProgramNotFound(_)
                | AdminServiceError::ApplicationNotFound(_)
                | AdminServiceError::Repository(RepositoryError::NotFound) => {
                    StatusCode::NOT_FOUND
                }
                AdminServiceError::StaleStatus { .. } | AdminServiceError::Archived(_) => {
                    StatusCode::CONFLICT
                }
                AdminServiceError::UnknownStatus(_) => StatusCode::UNPROCESSABLE_ENTITY,
                AdminServiceError::Repository(RepositoryError::Unavailable(_)) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::View(_)
            | AppError::Data(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Admin(err) => write!(f, "{}", err),
            AppError::View(err) => write!(f, "view error: {}", err),
            AppError::Data(err) => write!(f, "applicant data error: {}", err),
            AppError::BadRequest(reason) => write!(f, "bad request: {}", reason),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Admin(err) => Some(err),
            AppError::View(err) => Some(err),
            AppError::Data(err) => Some(err),
            AppError::BadRequest(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Server-side failures are logged in full but not echoed to the client.
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<AdminServiceError> for AppError {
    fn from(value: AdminServiceError) -> Self {
        Self::Admin(value)
    }
}

impl From<ApplicantDataError> for AppError {
    fn from(value: ApplicantDataError) -> Self {
        Self::Data(value)
    }
}

impl From<ViewError> for AppError {
    fn from(value: ViewError) -> Self {
        Self::View(value)
    }
}
