use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::sync::LazyLock;
use utoipa::ToSchema;

use super::RequestInput;
use super::value::to_check_string;

static INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").unwrap());
static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").unwrap());

const DEFAULT_MESSAGE: &str = "Invalid value";

/// Where a validated field lives in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

/// One failed check.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    /// Always `"field"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Raw value as received; omitted when the field was absent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub value: Option<Value>,
    pub msg: String,
    pub path: String,
    pub location: Location,
}

impl FieldError {
    pub fn new(
        value: Option<Value>,
        msg: impl Into<String>,
        path: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            kind: "field".to_string(),
            value,
            msg: msg.into(),
            path: path.into(),
            location,
        }
    }
}

/// A single check. Standard checks see the value's string form, `Custom`
/// sees the raw value.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    IsInt,
    IsNumeric,
    NotEmpty,
    IsBoolean,
    Custom(fn(Option<&Value>) -> bool),
}

impl Check {
    fn passes(&self, raw: Option<&Value>, text: &str) -> bool {
        match self {
            Check::IsInt => INT.is_match(text),
            Check::IsNumeric => NUMERIC.is_match(text),
            Check::NotEmpty => !text.is_empty(),
            Check::IsBoolean => matches!(text, "true" | "false" | "1" | "0"),
            Check::Custom(f) => f(raw),
        }
    }
}

/// Ordered checks for one field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    location: Location,
    field: &'static str,
    checks: Vec<(Check, &'static str)>,
}

/// Starts a rule on a path parameter.
pub fn param(field: &'static str) -> FieldRule {
    FieldRule::new(Location::Params, field)
}

/// Starts a rule on a JSON body field.
pub fn body(field: &'static str) -> FieldRule {
    FieldRule::new(Location::Body, field)
}

impl FieldRule {
    pub fn new(location: Location, field: &'static str) -> Self {
        Self {
            location,
            field,
            checks: Vec::new(),
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn check(mut self, check: Check) -> Self {
        self.checks.push((check, DEFAULT_MESSAGE));
        self
    }

    pub fn is_int(self) -> Self {
        self.check(Check::IsInt)
    }

    pub fn is_numeric(self) -> Self {
        self.check(Check::IsNumeric)
    }

    pub fn not_empty(self) -> Self {
        self.check(Check::NotEmpty)
    }

    pub fn is_boolean(self) -> Self {
        self.check(Check::IsBoolean)
    }

    pub fn custom(self, f: fn(Option<&Value>) -> bool) -> Self {
        self.check(Check::Custom(f))
    }

    /// Sets the message of the most recently added check.
    pub fn with_message(mut self, msg: &'static str) -> Self {
        if let Some(last) = self.checks.last_mut() {
            last.1 = msg;
        }
        self
    }

    /// Runs every check, appending one error per failure.
    pub fn evaluate(&self, input: &RequestInput, errors: &mut Vec<FieldError>) {
        let raw = input.get(self.location, self.field);
        let text = to_check_string(raw);

        for (check, msg) in &self.checks {
            if !check.passes(raw, &text) {
                errors.push(FieldError::new(raw.cloned(), *msg, self.field, self.location));
            }
        }
    }
}

/// Evaluates `rules` in order and collects every failure.
pub fn validate(rules: &[FieldRule], input: &RequestInput) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for rule in rules {
        rule.evaluate(input, &mut errors);
    }
    errors
}
