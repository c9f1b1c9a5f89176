//! Type-directed rendering of token values into SCSS text.
//!
//! [`convert`] is a pure function of a raw value and its [`TokenType`]:
//!
//! | Type | Input | Output |
//! |------|-------|--------|
//! | color | `"#0066cc"` | `#0066cc` |
//! | color | `{ colorSpace: "srgb", components: [1, 0, 0] }` | `#ff0000` |
//! | dimension / duration | `{ value: 16, unit: "px" }` | `16px` |
//! | fontFamily | `["Inter", "sans-serif"]` | `("Inter", sans-serif)` |
//! | cubicBezier | `[0.4, 0, 0.2, 1]` | `cubic-bezier(0.4, 0, 0.2, 1)` |
//! | typography / shadow / border | map of sub-fields | SCSS map literal |
//!
//! Every other type, and every shape a type does not recognise, is written
//! out with [`stringify`].
//!
//! # Module Structure
//!
//! - `color`: color strings and color-space objects
//! - `composite`: sub-type inference and map literals for composite tokens

mod color;
mod composite;

use serde_json::{Number, Value};

use crate::token::TokenType;

pub use composite::infer_subtype;

/// Generic font family keywords, written without quotes.
const GENERIC_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
    "ui-serif",
    "ui-sans-serif",
    "ui-monospace",
    "ui-rounded",
    "emoji",
    "math",
    "fangsong",
];

/// Renders a token value as SCSS text.
///
/// ```rust
/// use serde_json::json;
/// use token_sass::{convert, TokenType};
///
/// assert_eq!(convert(&json!({ "value": 16, "unit": "px" }), TokenType::Dimension), "16px");
/// assert_eq!(convert(&json!(700), TokenType::FontWeight), "700");
/// ```
pub fn convert(value: &Value, token_type: TokenType) -> String {
    match token_type {
        TokenType::Color => color::convert_color(value),
        TokenType::Dimension | TokenType::Duration => convert_measure(value),
        TokenType::FontFamily => convert_font_family(value),
        TokenType::CubicBezier => convert_cubic_bezier(value),
        TokenType::Typography | TokenType::Shadow | TokenType::Border => {
            composite::convert_composite(value)
        }
        TokenType::FontWeight | TokenType::Number | TokenType::Unknown => stringify(value),
    }
}

/// `{ value, unit }` becomes the value followed by the unit; strings pass through.
fn convert_measure(value: &Value) -> String {
    match value {
        Value::Object(map) => match (map.get("value"), map.get("unit")) {
            (Some(amount), Some(unit)) => format!("{}{}", stringify(amount), stringify(unit)),
            _ => stringify(value),
        },
        _ => stringify(value),
    }
}

fn convert_font_family(value: &Value) -> String {
    match value {
        Value::Array(families) => {
            let entries: Vec<String> = families
                .iter()
                .map(|family| {
                    let name = stringify(family);
                    if GENERIC_FAMILIES.contains(&name.as_str()) {
                        name
                    } else {
                        format!("\"{}\"", name)
                    }
                })
                .collect();
            format!("({})", entries.join(", "))
        }
        _ => stringify(value),
    }
}

fn convert_cubic_bezier(value: &Value) -> String {
    match value {
        Value::Array(points) if points.len() == 4 && points.iter().all(Value::is_number) => {
            let points: Vec<String> = points.iter().map(stringify).collect();
            format!("cubic-bezier({})", points.join(", "))
        }
        _ => stringify(value),
    }
}

/// Writes a value out as-is.
///
/// Strings are copied verbatim, numbers print without a trailing `.0`,
/// lists join their stringified items with `,` and maps become compact JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Formats a JSON number the shortest way that round-trips: `1`, `0.5`, `-2`.
pub(crate) fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) => format!("{}", f),
        None => n.to_string(),
    }
}
