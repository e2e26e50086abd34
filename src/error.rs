/*
 * Responsibility
 * - Application-wide AppError
 * - IntoResponse (HTTP status + problem-details JSON body)
 * - Uniform conversion of RepoError / validation / auth failures
 *
 * The traceId is filled in by middleware::trace_id, which finds the
 * ProblemDetails stashed in the response extensions.
 */
use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;
use crate::services::validation::ValidationErrors;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub status: u16,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ProblemDetails {
    fn new(status: StatusCode) -> Self {
        let (kind, title) = match status {
            StatusCode::BAD_REQUEST => (
                "https://tools.ietf.org/html/rfc9110#section-15.5.1",
                "Bad Request",
            ),
            StatusCode::UNAUTHORIZED => (
                "https://tools.ietf.org/html/rfc9110#section-15.5.2",
                "Unauthorized",
            ),
            StatusCode::NOT_FOUND => (
                "https://tools.ietf.org/html/rfc9110#section-15.5.5",
                "Not Found",
            ),
            StatusCode::REQUEST_TIMEOUT => (
                "https://tools.ietf.org/html/rfc9110#section-15.5.9",
                "Request Timeout",
            ),
            _ => (
                "https://tools.ietf.org/html/rfc9110#section-15.6.1",
                "An error occurred while processing your request.",
            ),
        };

        Self {
            kind,
            title,
            status: status.as_u16(),
            trace_id: String::new(),
            errors: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("request timeout")]
    Timeout,

    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut problem = ProblemDetails::new(status);

        match self {
            AppError::Validation(errors) => {
                problem.title = "One or more validation errors occurred.";
                problem.errors = Some(errors.into_field_map());
            }
            AppError::BadRequest(message) => {
                problem.errors = Some(BTreeMap::from([("$".to_string(), vec![message])]));
            }
            _ => {}
        }

        let mut res = (status, Json(problem.clone())).into_response();
        res.extensions_mut().insert(problem);
        res
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Db(err) => {
                tracing::error!(error = %err, "database error");
                AppError::Internal
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        AppError::Validation(e)
    }
}
