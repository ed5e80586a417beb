//! HTTP middleware: CORS enforcement and security headers.
//!
//! ```ignore
//! use axum_helpers::http::{create_cors_layer, cors_guard, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(axum::middleware::from_fn_with_state(cors.clone(), cors_guard))
//!     .layer(create_cors_layer(&cors)?);
//! ```

pub mod cors;
pub mod security;

pub use cors::{cors_guard, create_cors_layer};
pub use security::security_headers;
