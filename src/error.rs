use opentelemetry_semantic_conventions::{attribute::OTEL_STATUS_CODE, trace::ERROR_TYPE};
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{Span, error, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn log_and_record(&self, ctx: &str) {
        let current_span = Span::current();
        let is_valid_span = !current_span.is_none();

        let message = self.to_string();
        let error_kind = match self {
            AppError::Database(err) => {
                error!(error = %message, context = %ctx, db_error = %err, "Database error");
                "database_error"
            }
            AppError::Authentication(msg) => {
                warn!(message = %msg, context = %ctx, "Authentication error");
                "authentication_error"
            }
            AppError::NotFound(msg) => {
                warn!(message = %msg, context = %ctx, "Not found error");
                "not_found_error"
            }
            AppError::Validation(msg) => {
                warn!(message = %msg, context = %ctx, "Validation error");
                "validation_error"
            }
            AppError::Conflict(msg) => {
                warn!(message = %msg, context = %ctx, "Conflict error");
                "conflict_error"
            }
            AppError::Internal(msg) => {
                error!(message = %msg, context = %ctx, "Internal server error");
                "internal_error"
            }
        };

        if is_valid_span {
            current_span.record("error", tracing::field::display(true));
            current_span.record(ERROR_TYPE, tracing::field::display(error_kind));
            current_span.record("error.message", tracing::field::display(&message));

            if matches!(self, AppError::Database(_) | AppError::Internal(_)) {
                current_span.record(OTEL_STATUS_CODE, tracing::field::display("ERROR"));
            }
        }
    }

    pub fn status_code(&self) -> Status {
        match self {
            AppError::Database(_) => Status::InternalServerError,
            AppError::Authentication(_) => Status::Unauthorized,
            AppError::NotFound(_) => Status::NotFound,
            AppError::Validation(_) => Status::BadRequest,
            AppError::Conflict(_) => Status::Conflict,
            AppError::Internal(_) => Status::InternalServerError,
        }
    }

    /// Message sent to the client. Authentication failures never say which
    /// half of the credentials was wrong.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Authentication(_) => "Invalid username or password".to_string(),
            AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::Conflict(msg)
            | AppError::Internal(msg) => msg.clone(),
            AppError::Database(err) => format!("Database error: {}", err),
        }
    }

    pub fn to_response_with_log(&self, context: &str) -> Custom<Json<ErrorResponse>> {
        self.log_and_record(context);
        Custom(
            self.status_code(),
            Json(ErrorResponse {
                error: self.public_message(),
            }),
        )
    }
}

impl<'r> rocket::response::Responder<'r, 'static> for AppError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'static> {
        self.to_response_with_log(&format!("Request to {} {}", req.method(), req.uri()))
            .respond_to(req)
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> Self {
        AppError::Internal(format!("Cryptography error: {}", error))
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(error: sqlx::migrate::MigrateError) -> Self {
        AppError::Internal(format!("Migration error: {}", error))
    }
}

/// Maps a store error on a UNIQUE constraint to `Conflict`, leaving every
/// other error untouched.
pub fn unique_violation_as_conflict(error: sqlx::Error, message: &str) -> AppError {
    match &error {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(message.to_string())
        }
        _ => AppError::Database(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            AppError::Validation("bad id".into()).status_code(),
            Status::BadRequest
        );
        assert_eq!(
            AppError::NotFound("team 3".into()).status_code(),
            Status::NotFound
        );
        assert_eq!(
            AppError::Authentication("no such user".into()).status_code(),
            Status::Unauthorized
        );
        assert_eq!(
            AppError::Conflict("taken".into()).status_code(),
            Status::Conflict
        );
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status_code(),
            Status::InternalServerError
        );
    }

    #[test]
    fn authentication_message_is_generic() {
        let missing_user = AppError::Authentication("user bob not found".into());
        let bad_password = AppError::Authentication("password mismatch for bob".into());

        assert_eq!(missing_user.public_message(), bad_password.public_message());
        assert_eq!(missing_user.public_message(), "Invalid username or password");
    }

    #[test]
    fn non_unique_errors_stay_database_errors() {
        let err = unique_violation_as_conflict(sqlx::Error::RowNotFound, "taken");
        assert!(matches!(err, AppError::Database(_)));
    }
}
