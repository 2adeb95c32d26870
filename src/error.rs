//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key} '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found")]
    NotFound,
    #[error("validation: {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),
    #[error("request body too large")]
    PayloadTooLarge,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

/// One entry of a 422 `detail` list: where the input was wrong and why.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationIssue {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationIssue {
    pub fn new<L, S>(loc: L, msg: impl Into<String>, kind: &str) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValidationIssue {
            loc: loc.into_iter().map(Into::into).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Issues(Vec<ValidationIssue>),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: ErrorDetail,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, ErrorDetail::Message("Not found".into())),
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorDetail::Message("Request body too large".into()),
            ),
            AppError::Validation(issues) => {
                tracing::debug!(issues = ?issues, "request rejected");
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorDetail::Issues(issues))
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorDetail::Message("DB error".into()))
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
