//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! - **[`validation`]**: declarative field rules evaluated against path and body
//! - **[`extractors`]**: [`Validated`] runs a rule set before the handler
//! - **[`errors`]**: [`AppError`] and the JSON error bodies
//! - **[`http`]**: single-origin CORS and security headers
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
pub mod validation;

pub use server::{
    HealthCheckFuture, HealthResponse, OPENAPI_JSON, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

pub use http::{cors_guard, create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse, ValidationErrorResponse};

pub use extractors::{FromRequestInput, Validated};

pub use validation::{FieldError, FieldRule, Location, RequestInput};
