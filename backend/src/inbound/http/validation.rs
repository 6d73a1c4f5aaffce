//! Request validation helpers.
//!
//! Request DTOs derive [`validator::Validate`] and list their fields through
//! [`FieldOrder`]; [`validate_request`] turns the failures into one
//! [`FieldError`] per field, in declaration order, named by JSON key.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::error::ApiError;

/// Validator code for missing values.
pub(crate) const REQUIRED: &str = "required";
/// Validator code for malformed email addresses.
pub(crate) const EMAIL: &str = "email";

/// One failed field in a 422 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    #[schema(example = "email is a required field")]
    pub message: String,
    #[schema(example = "email")]
    pub field: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
        }
    }
}

/// Validated fields as `(rust_name, json_name)` pairs, in declaration order.
pub(crate) trait FieldOrder {
    const FIELDS: &'static [(&'static str, &'static str)];
}

/// Validate `request`, reporting at most one error per field.
///
/// A missing value wins over any other failure on the same field.
pub(crate) fn validate_request<T>(request: &T) -> Result<(), ApiError>
where
    T: Validate + FieldOrder,
{
    let Err(errors) = request.validate() else {
        return Ok(());
    };

    let by_field = errors.field_errors();
    let failures = T::FIELDS
        .iter()
        .filter_map(|(rust_name, json_name)| {
            let field_errors = by_field.get(*rust_name)?;
            let first = field_errors
                .iter()
                .find(|err| err.code == REQUIRED)
                .or_else(|| field_errors.first())?;
            Some(FieldError::new(*json_name, message_for(first, json_name)))
        })
        .collect();
    Err(ApiError::Validation(failures))
}

fn message_for(error: &ValidationError, field: &str) -> String {
    match error.code.as_ref() {
        REQUIRED => format!("{field} is a required field"),
        EMAIL => format!("{field} must be a valid email address"),
        _ => format!("{field} is invalid"),
    }
}
