//! JSON body extractor that turns every body problem into a JSON error: 413 when the
//! body exceeds the limit, otherwise 422 with a `detail` list.

use crate::error::{AppError, ValidationIssue};
use crate::service::Validate;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::{Error as PathError, Segment};

/// Like `axum::Json`, but rejects with [`AppError::Validation`] and runs
/// [`Validate`] on the payload before the handler sees it.
#[derive(Clone, Debug)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;
        let payload: T =
            serde_path_to_error::deserialize(value).map_err(|e| AppError::Validation(vec![shape_issue(&e)]))?;
        payload.validate()?;
        Ok(ValidJson(payload))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge;
    }
    let kind = match &rejection {
        JsonRejection::JsonSyntaxError(_) => "json_invalid",
        JsonRejection::MissingJsonContentType(_) => "content_type",
        _ => "body_error",
    };
    AppError::Validation(vec![ValidationIssue::new(["body"], rejection.body_text(), kind)])
}

/// `loc` is `body` followed by the path to the offending value.
fn shape_issue(err: &PathError<serde_json::Error>) -> ValidationIssue {
    let mut loc = vec!["body".to_string()];
    loc.extend(err.path().iter().filter_map(segment_name));
    let msg = err.inner().to_string();
    match missing_field(&msg) {
        Some(field) => {
            loc.push(field.to_string());
            ValidationIssue::new(loc, "Field required", "missing")
        }
        None => ValidationIssue::new(loc, msg.as_str(), "type_error"),
    }
}

fn segment_name(segment: &Segment) -> Option<String> {
    match segment {
        Segment::Map { key } => Some(key.clone()),
        Segment::Seq { index } => Some(index.to_string()),
        Segment::Enum { variant } => Some(variant.clone()),
        Segment::Unknown => None,
    }
}

/// Field name out of serde's "missing field `name`" message.
fn missing_field(msg: &str) -> Option<&str> {
    msg.strip_prefix("missing field `")?.split('`').next()
}
