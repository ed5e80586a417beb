//! Declarative request validation.
//!
//! A rule targets one field in the path parameters or the JSON body and holds
//! an ordered list of checks. Every check of every rule runs; each failure
//! becomes one [`FieldError`], in declaration order.
//!
//! ```rust
//! use axum_helpers::validation::{RequestInput, body, param, validate};
//! use serde_json::json;
//!
//! let rules = vec![
//!     param("id").is_int().with_message("ID no válido"),
//!     body("name").not_empty().with_message("El nombre del producto no puede ir vacío"),
//! ];
//!
//! let input = RequestInput::new([("id", "abc")], json!({}));
//! let errors = validate(&rules, &input);
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].msg, "ID no válido");
//! ```

mod input;
mod rules;
pub mod value;

pub use input::RequestInput;
pub use rules::{Check, FieldError, FieldRule, Location, body, param, validate};
