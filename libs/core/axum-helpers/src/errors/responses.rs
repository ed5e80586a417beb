//! Reusable OpenAPI response types for consistent API documentation.

use super::{ErrorResponse, ValidationErrorResponse};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Request failed validation",
    content_type = "application/json",
    example = json!({
        "errors": [{
            "type": "field",
            "value": "abc",
            "msg": "ID no válido",
            "path": "id",
            "location": "params"
        }]
    })
)]
pub struct BadRequestValidationResponse(pub ValidationErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "error": "Producto no encontrado" })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Origin not allowed",
    content_type = "application/json",
    example = json!({ "error": "Error de CORS" })
)]
pub struct ForbiddenResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "error": "Database error occurred" })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
