//! Token document dialect detection.
//!
//! Two dialects are recognised:
//!
//! - [`TokenFormat::Dtcg`]: leaves carry `$value`, groups may carry a `$type`
//!   that descendants inherit, and every `$`-prefixed key is metadata.
//! - [`TokenFormat::TokensStudio`]: leaves carry sibling `value` and `type`
//!   keys, and types are never inherited.
//!
//! ```json
//! { "color": { "$type": "color", "blue": { "$value": "#0066cc" } } }
//! ```
//!
//! ```json
//! { "color": { "blue": { "value": "#0066cc", "type": "color" } } }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved leaf marker of the DTCG dialect.
pub(crate) const DTCG_VALUE: &str = "$value";
/// Reserved type marker of the DTCG dialect.
pub(crate) const DTCG_TYPE: &str = "$type";
/// Prefix of DTCG metadata keys.
pub(crate) const METADATA_PREFIX: char = '$';
/// Reserved leaf marker of the Tokens Studio dialect.
pub(crate) const STUDIO_VALUE: &str = "value";
/// Reserved type marker of the Tokens Studio dialect.
pub(crate) const STUDIO_TYPE: &str = "type";

/// The dialect a token document is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenFormat {
    /// Typed-value leaves (`$value` / `$type`) with inherited group types.
    #[default]
    Dtcg,
    /// Grouped-type leaves (`value` + `type`) without inheritance.
    TokensStudio,
}

impl TokenFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenFormat::Dtcg => "dtcg",
            TokenFormat::TokensStudio => "tokens-studio",
        }
    }
}

impl fmt::Display for TokenFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dtcg" | "w3c" => Ok(TokenFormat::Dtcg),
            "tokens-studio" | "tokens_studio" | "studio" => Ok(TokenFormat::TokensStudio),
            other => Err(format!(
                "unknown token format '{}' (expected 'dtcg' or 'tokens-studio')",
                other
            )),
        }
    }
}

/// Classifies a parsed document.
///
/// The rule is existence-based so traversal order never matters: any `$value`
/// node makes the document DTCG; otherwise any node with both `value` and
/// `type` makes it Tokens Studio; a document with neither defaults to DTCG.
pub fn detect(document: &Value) -> TokenFormat {
    if any_node(document, &|map| map.contains_key(DTCG_VALUE)) {
        TokenFormat::Dtcg
    } else if any_node(document, &|map| {
        map.contains_key(STUDIO_VALUE) && map.contains_key(STUDIO_TYPE)
    }) {
        TokenFormat::TokensStudio
    } else {
        TokenFormat::Dtcg
    }
}

/// Depth-first search for an object node matching `predicate`.
///
/// Metadata keys are skipped rather than descended; arrays and scalars are
/// never candidates.
fn any_node(value: &Value, predicate: &dyn Fn(&Map<String, Value>) -> bool) -> bool {
    let Value::Object(map) = value else {
        return false;
    };
    if predicate(map) {
        return true;
    }
    map.iter()
        .filter(|(key, _)| !key.starts_with(METADATA_PREFIX))
        .any(|(_, child)| any_node(child, predicate))
}
