//! SCSS generation from resolved tokens.
//!
//! Two output styles are supported:
//!
//! ## Variables
//!
//! One variable per token, named after its full path:
//!
//! ```scss
//! $spacing-sm: 4px;
//! $spacing-md: 8px;
//! ```
//!
//! ## Map
//!
//! One variable per top-level group, holding a nested map:
//!
//! ```scss
//! $spacing: (
//!   sm: 4px,
//!   md: 8px,
//! );
//! ```

mod tree;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::convert::convert;
use crate::naming::variable_name;
use crate::token::TokenRecord;

/// Shape of the generated stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Flat `$name: value;` declarations.
    #[default]
    Variables,
    /// Nested SCSS maps, one per top-level group.
    Map,
}

impl OutputStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputStyle::Variables => "variables",
            OutputStyle::Map => "map",
        }
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "variables" | "vars" => Ok(OutputStyle::Variables),
            "map" | "maps" => Ok(OutputStyle::Map),
            other => Err(format!(
                "unknown output style '{}' (expected 'variables' or 'map')",
                other
            )),
        }
    }
}

/// Renders `records` as SCSS in the requested style.
///
/// An empty slice produces an empty string; anything else ends with a newline.
pub fn generate(records: &[TokenRecord], style: OutputStyle) -> String {
    if records.is_empty() {
        return String::new();
    }
    match style {
        OutputStyle::Variables => generate_variables(records),
        OutputStyle::Map => tree::generate_maps(records),
    }
}

fn generate_variables(records: &[TokenRecord]) -> String {
    let mut out = records
        .iter()
        .map(|record| {
            format!(
                "${}: {};",
                variable_name(&record.path),
                convert(&record.value, record.token_type)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenType;
    use serde_json::json;

    fn dimension(path: &str, value: &str) -> TokenRecord {
        TokenRecord::new(
            path.split('.').map(String::from).collect(),
            TokenType::Dimension,
            json!(value),
        )
    }

    #[test]
    fn test_empty_input_is_empty_in_both_styles() {
        assert_eq!(generate(&[], OutputStyle::Variables), "");
        assert_eq!(generate(&[], OutputStyle::Map), "");
    }

    #[test]
    fn test_variables_one_line_per_token() {
        let records = vec![dimension("spacing.sm", "4px"), dimension("spacing.md", "8px")];
        assert_eq!(
            generate(&records, OutputStyle::Variables),
            "$spacing-sm: 4px;\n$spacing-md: 8px;\n"
        );
    }

    #[test]
    fn test_variables_sanitizes_names() {
        let records = vec![TokenRecord::new(
            vec!["color".into(), "brandPrimary".into(), "Hover State".into()],
            TokenType::Color,
            json!("#123456"),
        )];
        assert_eq!(
            generate(&records, OutputStyle::Variables),
            "$color-brand-primary-hover-state: #123456;\n"
        );
    }

    #[test]
    fn test_variables_keep_duplicates_in_order() {
        let records = vec![
            dimension("gap", "1px"),
            dimension("gap", "2px"),
        ];
        assert_eq!(
            generate(&records, OutputStyle::Variables),
            "$gap: 1px;\n$gap: 2px;\n"
        );
    }

    #[test]
    fn test_variables_composite_value() {
        let records = vec![TokenRecord::new(
            vec!["border".into(), "default".into()],
            TokenType::Border,
            json!({ "color": "#ccc", "width": "1px", "style": "solid" }),
        )];
        assert_eq!(
            generate(&records, OutputStyle::Variables),
            "$border-default: (\n  color: #ccc,\n  width: 1px,\n  style: solid,\n);\n"
        );
    }

    #[test]
    fn test_output_style_parsing() {
        assert_eq!("variables".parse::<OutputStyle>(), Ok(OutputStyle::Variables));
        assert_eq!("MAP".parse::<OutputStyle>(), Ok(OutputStyle::Map));
        assert!("css".parse::<OutputStyle>().is_err());
        assert_eq!(OutputStyle::default(), OutputStyle::Variables);
        assert_eq!(OutputStyle::Map.to_string(), "map");
    }
}
