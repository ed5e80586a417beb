use serde_json::{Map, Value};

use super::Location;
use super::value::{to_bool, to_check_string, to_number};

/// Raw request data the validators run against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestInput {
    params: Map<String, Value>,
    body: Value,
}

impl RequestInput {
    pub fn new<I, K, V>(params: I, body: Value) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let params = params
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        Self { params, body }
    }

    /// Field lookup. Non-object bodies have no fields.
    pub fn get(&self, location: Location, field: &str) -> Option<&Value> {
        match location {
            Location::Params => self.params.get(field),
            Location::Body => self.body.as_object().and_then(|body| body.get(field)),
        }
    }

    pub fn text(&self, location: Location, field: &str) -> String {
        to_check_string(self.get(location, field))
    }

    pub fn number(&self, location: Location, field: &str) -> Option<f64> {
        to_number(self.get(location, field))
    }

    pub fn boolean(&self, location: Location, field: &str) -> bool {
        to_bool(self.get(location, field))
    }
}
