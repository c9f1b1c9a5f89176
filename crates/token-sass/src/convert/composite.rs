//! Composite tokens (typography, shadow, border) rendered as SCSS maps.
//!
//! Each sub-field becomes one `key: value,` entry. Keys are kebab-cased and
//! values are converted with a type inferred from the field name:
//!
//! ```text
//! { "fontFamily": "Inter", "fontSize": "16px", "lineHeight": 1.5 }
//!
//! (
//!   font-family: Inter,
//!   font-size: 16px,
//!   line-height: 1.5,
//! )
//! ```

use serde_json::Value;

use super::{convert, stringify};
use crate::naming::kebab_case;
use crate::token::TokenType;

/// How a field name is tested against a rule.
enum FieldMatch {
    /// The lowercased name contains any of these fragments.
    Contains(&'static [&'static str]),
    /// The lowercased name is exactly this.
    Equals(&'static str),
}

impl FieldMatch {
    fn matches(&self, lowered: &str) -> bool {
        match self {
            FieldMatch::Contains(fragments) => fragments.iter().any(|f| lowered.contains(f)),
            FieldMatch::Equals(name) => lowered == *name,
        }
    }
}

/// Sub-type rules, checked in order; the first match wins.
///
/// `lineheight` also contains `height`, so the dimension rule claims it first.
const SUBTYPE_RULES: &[(FieldMatch, TokenType)] = &[
    (FieldMatch::Contains(&["color"]), TokenType::Color),
    (FieldMatch::Contains(&["family"]), TokenType::FontFamily),
    (FieldMatch::Contains(&["weight"]), TokenType::FontWeight),
    (
        FieldMatch::Contains(&[
            "size", "width", "height", "spacing", "offset", "blur", "spread",
        ]),
        TokenType::Dimension,
    ),
    (FieldMatch::Equals("lineheight"), TokenType::Number),
];

/// Infers the type of a composite sub-field from its name.
///
/// ```rust
/// use token_sass::{infer_subtype, TokenType};
///
/// assert_eq!(infer_subtype("fontFamily"), TokenType::FontFamily);
/// assert_eq!(infer_subtype("offsetX"), TokenType::Dimension);
/// assert_eq!(infer_subtype("style"), TokenType::Unknown);
/// ```
pub fn infer_subtype(field: &str) -> TokenType {
    let lowered = field.to_lowercase();
    SUBTYPE_RULES
        .iter()
        .find(|(rule, _)| rule.matches(&lowered))
        .map(|(_, kind)| *kind)
        .unwrap_or(TokenType::Unknown)
}

pub(super) fn convert_composite(value: &Value) -> String {
    let Value::Object(fields) = value else {
        return stringify(value);
    };
    if fields.is_empty() {
        return "()".to_string();
    }

    let mut out = String::from("(\n");
    for (name, field) in fields {
        out.push_str(&format!(
            "  {}: {},\n",
            kebab_case(name),
            convert(field, infer_subtype(name))
        ));
    }
    out.push(')');
    out
}
