//! Field rules applied to request payloads after they deserialize.

use crate::error::{AppError, ValidationIssue};
use crate::model::ItemCreate;

/// Upper bound on `Item::name`, counted in characters.
pub const NAME_MAX_CHARS: usize = 200;

/// Rules beyond type and shape. Runs before any storage access.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

impl Validate for ItemCreate {
    fn validate(&self) -> Result<(), AppError> {
        max_chars("name", &self.name, NAME_MAX_CHARS)
    }
}

fn max_chars(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(vec![ValidationIssue::new(
            ["body", field],
            format!("String should have at most {} characters", max),
            "string_too_long",
        )]));
    }
    Ok(())
}
