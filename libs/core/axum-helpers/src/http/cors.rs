use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, header, header::InvalidHeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::cors::CorsConfig;
use std::time::Duration;
use tower_http::cors::CorsLayer;

use crate::errors::{AppError, ErrorCode};

/// CORS headers for the single configured origin.
pub fn create_cors_layer(config: &CorsConfig) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(&config.allowed_origin)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

/// Rejects requests whose `Origin` header names another site.
///
/// Requests without an `Origin` header are not cross-origin browser calls
/// and pass through.
pub async fn cors_guard(State(config): State<CorsConfig>, request: Request, next: Next) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .map(|v| v.to_str().unwrap_or_default());

    match origin {
        Some(origin) if !config.allows(origin) => {
            tracing::warn!(
                error_code = ErrorCode::CorsRejected.code(),
                origin,
                "Rejected cross-origin request"
            );
            AppError::Forbidden(ErrorCode::CorsRejected.default_message().to_string()).into_response()
        }
        _ => next.run(request).await,
    }
}
