use rocket::serde::json::{self, Json};
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// A JSON body whose parse failure reaches the handler instead of Rocket's
/// 422 catcher, so it can be reported as a 400.
pub type JsonBody<'r, T> = Result<Json<T>, json::Error<'r>>;

pub trait JsonValidateExt<T> {
    fn validated(self) -> Result<T, AppError>;
}

impl<T: Validate> JsonValidateExt<T> for JsonBody<'_, T> {
    fn validated(self) -> Result<T, AppError> {
        let Json(value) =
            self.map_err(|e| AppError::Validation(format!("Invalid JSON body: {}", e)))?;

        value
            .validate()
            .map_err(|e| AppError::Validation(describe_errors(&e)))?;

        Ok(value)
    }
}

/// Flattens field errors into `field: message; field: message`, sorted by
/// field name so the output is stable.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .clone()
                    .unwrap_or_else(|| "Invalid value".into());
                format!("{}: {}", field, message)
            })
        })
        .collect();

    messages.sort();
    messages.join("; ")
}

/// Parses a path or query identifier.
pub fn parse_id(raw: &str, name: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::Validation(format!("Invalid {} parameter", name)))
}

/// Parses a required query identifier.
pub fn require_id(raw: Option<&str>, name: &str) -> Result<i64, AppError> {
    match raw {
        Some(raw) => parse_id(raw, name),
        None => Err(AppError::Validation(format!("{} parameter is required", name))),
    }
}
