//! Flat token records produced by extraction.

use serde_json::Value;

use super::kind::TokenType;

/// One token taken out of a document.
///
/// Records are created by the extractor, have their `value` rewritten in place
/// by the alias resolver, and are read by the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    /// Path segments from the root to the leaf, metadata keys excluded.
    pub path: Vec<String>,
    /// Declared or inherited category.
    pub token_type: TokenType,
    /// Raw value: string, number, list, or a map of sub-fields.
    pub value: Value,
}

impl TokenRecord {
    pub fn new(path: Vec<String>, token_type: TokenType, value: Value) -> Self {
        Self {
            path,
            token_type,
            value,
        }
    }

    /// Identity key used by alias references: the path joined with periods.
    pub fn key(&self) -> String {
        self.path.join(".")
    }
}
