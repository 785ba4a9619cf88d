use application::ApplicationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                code,
                message: message.into(),
            },
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        use application::ApplicationError as AppErr;
        use domain::{DomainError, RepositoryError};

        match error {
            AppErr::Domain(DomainError::InvalidArgument { field, reason }) => ApiError::new(
                StatusCode::BAD_REQUEST,
                "INVALID_ARGUMENT",
                format!("{}: {}", field, reason),
            ),
            AppErr::Domain(DomainError::UserNotFound) => {
                ApiError::new(StatusCode::NOT_FOUND, "USER_NOT_FOUND", "user not found")
            }
            AppErr::Domain(DomainError::JobNotFound) => {
                ApiError::new(StatusCode::NOT_FOUND, "JOB_NOT_FOUND", "job not found")
            }
            AppErr::Domain(DomainError::RatingNotFound) => ApiError::new(
                StatusCode::NOT_FOUND,
                "RATING_NOT_FOUND",
                "rating not found",
            ),
            AppErr::Domain(DomainError::EmailTaken) => ApiError::new(
                StatusCode::CONFLICT,
                "EMAIL_TAKEN",
                "email already in use",
            ),
            AppErr::Domain(DomainError::HandleTaken) => ApiError::new(
                StatusCode::CONFLICT,
                "HANDLE_TAKEN",
                "handle already in use",
            ),
            AppErr::Domain(DomainError::AlreadyApplied) => ApiError::new(
                StatusCode::CONFLICT,
                "APPLICATION_EXISTS",
                "you have already applied for this job",
            ),
            // 重复评价在现网语义下是 Forbidden 而非 Conflict
            AppErr::Domain(err @ DomainError::AlreadyRated) => {
                ApiError::new(StatusCode::FORBIDDEN, "ALREADY_RATED", err.to_string())
            }
            AppErr::Domain(err @ DomainError::PermissionDenied { .. }) => {
                ApiError::new(StatusCode::FORBIDDEN, "PERMISSION_DENIED", err.to_string())
            }
            AppErr::Repository(repo_err) => match repo_err {
                RepositoryError::NotFound => ApiError::new(
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    "requested resource not found",
                ),
                RepositoryError::Conflict => {
                    ApiError::new(StatusCode::CONFLICT, "CONFLICT", "resource already exists")
                }
                RepositoryError::Storage { message } => ApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    format!("database error: {}", message),
                ),
            },
            AppErr::Password(err) => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "PASSWORD_ERROR",
                format!("password error: {}", err),
            ),
            AppErr::Authentication => ApiError::new(
                StatusCode::UNAUTHORIZED,
                "AUTHENTICATION_FAILED",
                "authentication failed",
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
