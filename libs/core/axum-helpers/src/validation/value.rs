//! Loose conversions applied to raw request values before checking them.

use serde_json::{Number, Value};

/// String form seen by the standard checks.
///
/// Missing and `null` become `""`, objects become `"[object Object]"`.
/// Numbers print as plain decimals between `1e-7` and `1e21` and in
/// exponent form (`1e+21`) outside it.
///
/// Arrays are checked as one value: their elements are joined with `","`
/// and the checks run once on the joined text, so `[1, 2]` fails
/// `is_numeric` instead of passing element by element.
pub fn to_check_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_to_string(n),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| to_check_string(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

fn number_to_string(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    n.as_f64().map_or_else(|| n.to_string(), float_to_string)
}

fn float_to_string(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let magnitude = f.abs();
    if (1e-7..1e21).contains(&magnitude) {
        // Display never switches to exponent form and keeps the shortest digits.
        return f.to_string();
    }
    let formatted = format!("{f:e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}

/// Numeric coercion used by custom comparisons.
///
/// Strings accept decimal and exponent forms, `Infinity` with an optional
/// sign and unsigned `0x`/`0o`/`0b` integers. Returns `None` where the
/// comparison can never succeed: absent values, arrays, objects and any
/// other text.
pub fn to_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => string_to_number(s),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn string_to_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    match trimmed {
        "" => return Some(0.0),
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let prefix = trimmed.get(..2).map(str::to_ascii_lowercase);
    let radix = match prefix.as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&trimmed[2..], radix);
    }

    // `str::parse` also takes "inf" and "nan" spellings, which stay non-numeric here.
    let decimal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Boolean coercion applied after a value passed `is_boolean`.
pub fn to_bool(value: Option<&Value>) -> bool {
    matches!(to_check_string(value).as_str(), "true" | "1")
}
