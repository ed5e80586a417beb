//! Extractor that runs a declared rule set before the handler.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{HeaderMap, header},
};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::errors::AppError;
use crate::validation::{FieldRule, Location, RequestInput, validate};

/// Typed input built from a request that passed its rules.
pub trait FromRequestInput: Sized {
    /// Rules evaluated before [`FromRequestInput::from_input`] is called.
    fn rules() -> &'static [FieldRule];

    /// Converts already-validated input. Only fails for conditions the
    /// rules cannot express.
    fn from_input(input: &RequestInput) -> Result<Self, AppError>;
}

/// Validates path parameters and JSON body against `T::rules()`.
///
/// Any failure rejects with 400 `{ "errors": [...] }` and the handler never
/// runs. The body is only read when a rule targets it and the request
/// declares a JSON content type; otherwise it is treated as `{}`.
///
/// ```ignore
/// async fn get_product(Validated(ProductPath(id)): Validated<ProductPath>) -> ... {}
/// ```
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<T, S> FromRequest<S> for Validated<T>
where
    T: FromRequestInput,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let params = Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
            .map(|Path(params)| params)
            .unwrap_or_default();

        let reads_body = T::rules().iter().any(|r| r.location() == Location::Body);
        let body = if reads_body && has_json_content_type(&parts.headers) {
            let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            parse_body(&bytes)?
        } else {
            Value::Object(Map::new())
        };

        let input = RequestInput::new(params, body);
        let errors = validate(T::rules(), &input);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        T::from_input(&input).map(Validated)
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

fn parse_body(bytes: &[u8]) -> Result<Value, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    Ok(serde_json::from_slice(bytes)?)
}
