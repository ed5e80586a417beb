//! Request rules for the product endpoints.
//!
//! Messages are part of the public contract and stay in Spanish.

use axum_helpers::validation::{FieldRule, Location, RequestInput, body, param, value::to_number};
use axum_helpers::{AppError, FromRequestInput};
use serde_json::Value;
use std::sync::LazyLock;

use crate::models::{CreateProduct, ReplaceProduct};

pub const INVALID_ID: &str = "ID no válido";
pub const NAME_EMPTY: &str = "El nombre del producto no puede ir vacío";
pub const PRICE_NOT_NUMBER: &str = "El precio del producto debe ser un número";
pub const PRICE_EMPTY: &str = "El precio del producto no puede ir vacío";
pub const PRICE_NOT_POSITIVE: &str = "El precio del producto debe ser mayor de 0";
pub const AVAILABILITY_INVALID: &str = "Valor para disponibilidad no válido";
pub const NOT_FOUND: &str = "Producto no encontrado";
pub const DELETED: &str = "Producto eliminado";

fn is_positive(value: Option<&Value>) -> bool {
    to_number(value).is_some_and(|n| n > 0.0)
}

fn id_rule() -> FieldRule {
    param("id").is_int().with_message(INVALID_ID)
}

fn product_rules() -> [FieldRule; 2] {
    [
        body("name").not_empty().with_message(NAME_EMPTY),
        body("price")
            .is_numeric()
            .with_message(PRICE_NOT_NUMBER)
            .not_empty()
            .with_message(PRICE_EMPTY)
            .custom(is_positive)
            .with_message(PRICE_NOT_POSITIVE),
    ]
}

/// GET/PATCH/DELETE `/{id}`
pub static ID_RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| vec![id_rule()]);

/// POST `/`
pub static CREATE_RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| product_rules().into());

/// PUT `/{id}`
pub static REPLACE_RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    let mut rules = vec![id_rule()];
    rules.extend(product_rules());
    rules.push(
        body("availability")
            .is_boolean()
            .with_message(AVAILABILITY_INVALID),
    );
    rules
});

/// Path id of an existing-or-not product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i32);

/// PUT payload together with its target id.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceRequest {
    pub id: i32,
    pub input: ReplaceProduct,
}

// Integer-shaped ids outside the key range cannot name a stored product.
fn parse_id(input: &RequestInput) -> Result<i32, AppError> {
    input
        .text(Location::Params, "id")
        .parse::<i32>()
        .map_err(|_| AppError::NotFound(NOT_FOUND.to_string()))
}

fn parse_price(input: &RequestInput) -> Result<f64, AppError> {
    input
        .number(Location::Body, "price")
        .ok_or_else(|| AppError::BadRequest(PRICE_NOT_NUMBER.to_string()))
}

impl FromRequestInput for ProductId {
    fn rules() -> &'static [FieldRule] {
        ID_RULES.as_slice()
    }

    fn from_input(input: &RequestInput) -> Result<Self, AppError> {
        parse_id(input).map(ProductId)
    }
}

impl FromRequestInput for CreateProduct {
    fn rules() -> &'static [FieldRule] {
        CREATE_RULES.as_slice()
    }

    fn from_input(input: &RequestInput) -> Result<Self, AppError> {
        Ok(CreateProduct {
            name: input.text(Location::Body, "name"),
            price: parse_price(input)?,
        })
    }
}

impl FromRequestInput for ReplaceRequest {
    fn rules() -> &'static [FieldRule] {
        REPLACE_RULES.as_slice()
    }

    fn from_input(input: &RequestInput) -> Result<Self, AppError> {
        Ok(ReplaceRequest {
            id: parse_id(input)?,
            input: ReplaceProduct {
                name: input.text(Location::Body, "name"),
                price: parse_price(input)?,
                availability: input.boolean(Location::Body, "availability"),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::validation::validate;
    use serde_json::json;

    fn messages(rules: &[FieldRule], input: &RequestInput) -> Vec<String> {
        validate(rules, input).into_iter().map(|e| e.msg).collect()
    }

    fn body_only(body: Value) -> RequestInput {
        RequestInput::new(Vec::<(String, String)>::new(), body)
    }

    #[test]
    fn test_empty_create_body_yields_four_errors() {
        assert_eq!(
            messages(&CREATE_RULES, &body_only(json!({}))),
            [NAME_EMPTY, PRICE_NOT_NUMBER, PRICE_EMPTY, PRICE_NOT_POSITIVE]
        );
    }

    #[test]
    fn test_empty_replace_body_yields_five_errors() {
        let input = RequestInput::new([("id", "1")], json!({}));
        assert_eq!(
            messages(&REPLACE_RULES, &input),
            [NAME_EMPTY, PRICE_NOT_NUMBER, PRICE_EMPTY, PRICE_NOT_POSITIVE, AVAILABILITY_INVALID]
        );
    }

    #[test]
    fn test_text_price_yields_two_errors() {
        let input = body_only(json!({ "name": "Monitor", "price": "hola" }));
        assert_eq!(messages(&CREATE_RULES, &input), [PRICE_NOT_NUMBER, PRICE_NOT_POSITIVE]);
    }

    #[test]
    fn test_zero_price_yields_one_error() {
        let input = body_only(json!({ "name": "Monitor", "price": 0 }));
        assert_eq!(messages(&CREATE_RULES, &input), [PRICE_NOT_POSITIVE]);
    }

    #[test]
    fn test_large_and_tiny_prices_are_accepted() {
        for price in [json!(1e16), json!(0.000005)] {
            let input = body_only(json!({ "name": "Monitor", "price": price }));
            assert!(messages(&CREATE_RULES, &input).is_empty(), "price {price}");
        }
    }

    #[test]
    fn test_hex_price_is_only_not_a_number() {
        let input = body_only(json!({ "name": "Monitor", "price": "0x10" }));
        assert_eq!(messages(&CREATE_RULES, &input), [PRICE_NOT_NUMBER]);
    }

    #[test]
    fn test_invalid_id_yields_single_error() {
        let input = RequestInput::new([("id", "not-valid-url")], json!({}));
        assert_eq!(messages(&ID_RULES, &input), [INVALID_ID]);
    }

    #[test]
    fn test_create_from_input_coerces_price() {
        let input = body_only(json!({ "name": "Mouse", "price": "40", "availability": false }));
        let create = CreateProduct::from_input(&input).unwrap();
        assert_eq!(create, CreateProduct { name: "Mouse".into(), price: 40.0 });
    }

    #[test]
    fn test_replace_from_input_coerces_availability() {
        let input = RequestInput::new(
            [("id", "+7")],
            json!({ "name": "Mouse", "price": 25.5, "availability": "0" }),
        );
        let request = ReplaceRequest::from_input(&input).unwrap();
        assert_eq!(request.id, 7);
        assert!(!request.input.availability);
        assert_eq!(request.input.price, 25.5);
    }

    #[test]
    fn test_out_of_range_id_is_not_found() {
        let input = RequestInput::new([("id", "99999999999")], json!({}));
        assert!(validate(&ID_RULES, &input).is_empty());
        assert!(matches!(ProductId::from_input(&input), Err(AppError::NotFound(_))));
    }
}
