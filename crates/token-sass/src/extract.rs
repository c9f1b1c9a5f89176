//! Flattening a token document into an ordered list of [`TokenRecord`]s.
//!
//! Extraction is a single read-only pass. Records come out in document order,
//! which is also the order the generator emits them in.

use serde_json::{Map, Value};

use crate::format::{
    TokenFormat, DTCG_TYPE, DTCG_VALUE, METADATA_PREFIX, STUDIO_TYPE, STUDIO_VALUE,
};
use crate::token::{TokenRecord, TokenType};

/// Extracts every token of `document` according to `format`.
///
/// The root is never a token itself: a root object that is already a leaf
/// yields no records.
pub fn extract(document: &Value, format: TokenFormat) -> Vec<TokenRecord> {
    let mut records = Vec::new();
    let Value::Object(root) = document else {
        return records;
    };

    match format {
        TokenFormat::Dtcg => {
            if !root.contains_key(DTCG_VALUE) {
                let inherited = group_type(root, None);
                walk_dtcg_children(root, &mut Vec::new(), inherited, &mut records);
            }
        }
        TokenFormat::TokensStudio => {
            if !is_studio_leaf(root) {
                walk_studio_children(root, &mut Vec::new(), &mut records);
            }
        }
    }

    tracing::debug!(format = %format, count = records.len(), "extracted tokens");
    records
}

fn walk_dtcg(
    node: &Map<String, Value>,
    path: &mut Vec<String>,
    inherited: Option<&str>,
    out: &mut Vec<TokenRecord>,
) {
    if let Some(value) = node.get(DTCG_VALUE) {
        let token_type = group_type(node, inherited)
            .map(TokenType::from_tag)
            .unwrap_or_default();
        out.push(TokenRecord::new(path.clone(), token_type, value.clone()));
        return;
    }

    let context = group_type(node, inherited);
    walk_dtcg_children(node, path, context, out);
}

fn walk_dtcg_children(
    node: &Map<String, Value>,
    path: &mut Vec<String>,
    context: Option<&str>,
    out: &mut Vec<TokenRecord>,
) {
    for (key, child) in node {
        if key.starts_with(METADATA_PREFIX) {
            continue;
        }
        if let Value::Object(child) = child {
            path.push(key.clone());
            walk_dtcg(child, path, context, out);
            path.pop();
        }
    }
}

/// The node's own `$type` if it is a string, else the inherited context.
fn group_type<'a>(node: &'a Map<String, Value>, inherited: Option<&'a str>) -> Option<&'a str> {
    node.get(DTCG_TYPE)
        .and_then(Value::as_str)
        .or(inherited)
}

fn walk_studio(node: &Map<String, Value>, path: &mut Vec<String>, out: &mut Vec<TokenRecord>) {
    if is_studio_leaf(node) {
        let token_type = node
            .get(STUDIO_TYPE)
            .and_then(Value::as_str)
            .map(TokenType::from_tokens_studio_tag)
            .unwrap_or_default();
        let value = node.get(STUDIO_VALUE).cloned().unwrap_or(Value::Null);
        out.push(TokenRecord::new(path.clone(), token_type, value));
        return;
    }
    walk_studio_children(node, path, out);
}

fn walk_studio_children(
    node: &Map<String, Value>,
    path: &mut Vec<String>,
    out: &mut Vec<TokenRecord>,
) {
    for (key, child) in node {
        if let Value::Object(child) = child {
            path.push(key.clone());
            walk_studio(child, path, out);
            path.pop();
        }
    }
}

fn is_studio_leaf(node: &Map<String, Value>) -> bool {
    node.contains_key(STUDIO_VALUE) && node.contains_key(STUDIO_TYPE)
}
