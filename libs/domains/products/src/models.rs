use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A product as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Assigned by the store, never reused
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    /// Always greater than zero
    #[schema(example = 300)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a product. Availability always starts as `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "El nombre del producto no puede ir vacío"))]
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "El precio del producto debe ser mayor de 0"))]
    #[schema(example = 399)]
    pub price: f64,
}

/// Full replacement of a product's mutable fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplaceProduct {
    #[validate(length(min = 1, message = "El nombre del producto no puede ir vacío"))]
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "El precio del producto debe ser mayor de 0"))]
    #[schema(example = 399)]
    pub price: f64,

    #[schema(example = true)]
    pub availability: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
}

/// Confirmation returned by delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Producto eliminado")]
    pub data: String,
}
