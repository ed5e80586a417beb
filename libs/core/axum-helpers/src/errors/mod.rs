pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::validation::FieldError;

/// Body of every non-validation error response.
///
/// ```json
/// { "error": "Producto no encontrado" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Body of a 400 produced by the request validators.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation failed with {} error(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("JSON parsing error: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            AppError::Validation(errors) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    count = errors.len(),
                    "Request validation failed"
                );
                return (StatusCode::BAD_REQUEST, Json(ValidationErrorResponse { errors }))
                    .into_response();
            }
            AppError::InvalidJson(e) => {
                tracing::warn!(error_code = ErrorCode::InvalidJson.code(), "Invalid JSON body: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string(), ErrorCode::InvalidJson)
            }
            AppError::Database(e) => {
                let code = database_error_code(&e);
                tracing::error!(error_code = code.code(), "Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, code.default_message().to_string(), code)
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg, ErrorCode::BadRequest)
            }
            AppError::Forbidden(msg) => {
                tracing::info!(error_code = ErrorCode::Forbidden.code(), "Forbidden: {}", msg);
                (StatusCode::FORBIDDEN, msg, ErrorCode::Forbidden)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg, ErrorCode::NotFound)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (StatusCode::INTERNAL_SERVER_ERROR, msg, ErrorCode::InternalError)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(
                    error_code = ErrorCode::ServiceUnavailable.code(),
                    "Service unavailable: {}",
                    msg
                );
                (StatusCode::SERVICE_UNAVAILABLE, msg, ErrorCode::ServiceUnavailable)
            }
        };

        tracing::debug!(error = code.as_str(), status = status.as_u16(), "Returning error response");
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

fn database_error_code(error: &DbErr) -> ErrorCode {
    match error {
        DbErr::RecordNotFound(_) => ErrorCode::DatabaseNotFound,
        DbErr::ConnectionAcquire(_) => ErrorCode::DatabasePoolTimeout,
        DbErr::Conn(_) => ErrorCode::DatabaseConnection,
        DbErr::Exec(_) | DbErr::Query(_) => ErrorCode::DatabaseError,
        _ => ErrorCode::DatabaseUnhandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Location;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_renders_errors_array() {
        let error = AppError::Validation(vec![FieldError::new(
            None,
            "El nombre del producto no puede ir vacío",
            "name",
            Location::Body,
        )]);

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({
                "errors": [{
                    "type": "field",
                    "msg": "El nombre del producto no puede ir vacío",
                    "path": "name",
                    "location": "body"
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_not_found_renders_error_message() {
        let response = AppError::NotFound("Producto no encontrado".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "error": "Producto no encontrado" }));
    }

    #[tokio::test]
    async fn test_database_error_hides_driver_details() {
        let response = AppError::Database(DbErr::Custom("password authentication failed".into()))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": ErrorCode::DatabaseUnhandled.default_message() })
        );
    }

    #[tokio::test]
    async fn test_invalid_json_is_bad_request() {
        let parse_error = serde_json::from_str::<Value>("{\"name\":").unwrap_err();
        let response = AppError::from(parse_error).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("EOF"));
    }
}
