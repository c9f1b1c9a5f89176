//! Alias resolution between tokens of one document.
//!
//! A token value that is exactly `{some.identity.key}` is replaced by the
//! resolved value of the token at that key. Resolution is demand-driven and
//! depth-first: a referenced token is fully resolved before its value is
//! substituted, so chains of any length collapse to their final value and the
//! result does not depend on the order of the input.
//!
//! Two sets drive the walk:
//!
//! - `visiting`: keys whose resolution is in progress. Reaching one of these
//!   again means the references form a cycle.
//! - `resolved`: memoised final values by key, so every token is resolved once.
//!
//! Map-valued tokens are resolved field by field, which lets composite tokens
//! point individual sub-fields at other tokens. Lists are left untouched.
//!
//! References to keys that do not exist are not errors; the string is kept
//! verbatim.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{Result, TokenError};
use crate::token::TokenRecord;

static ALIAS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{([^{}]+)\}$").expect("alias pattern is a valid regex"));

/// Returns the identity key referenced by `value` if the whole string is an alias.
///
/// ```rust
/// use token_sass::resolve::alias_target;
///
/// assert_eq!(alias_target("{color.blue}"), Some("color.blue"));
/// assert_eq!(alias_target("1px solid {color.blue}"), None);
/// ```
pub fn alias_target(value: &str) -> Option<&str> {
    ALIAS_PATTERN
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Replaces every alias reference in `records` with the referenced value.
///
/// On error the records are left exactly as they were.
///
/// # Errors
///
/// Returns [`TokenError::CircularReference`] when references form a cycle.
pub fn resolve_aliases(records: &mut [TokenRecord]) -> Result<()> {
    let values = {
        let mut resolver = AliasResolver::new(records);
        (0..records.len())
            .map(|index| resolver.resolve_record(index))
            .collect::<Result<Vec<_>>>()?
    };

    for (record, value) in records.iter_mut().zip(values) {
        record.value = value;
    }
    Ok(())
}

struct AliasResolver<'a> {
    records: &'a [TokenRecord],
    /// Identity key → index of the record that owns the key. Later duplicates win.
    index: HashMap<String, usize>,
    visiting: HashSet<String>,
    /// Keys in the order they were entered, for cycle reporting.
    stack: Vec<String>,
    resolved: HashMap<String, Value>,
}

impl<'a> AliasResolver<'a> {
    fn new(records: &'a [TokenRecord]) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.key(), i))
            .collect();
        Self {
            records,
            index,
            visiting: HashSet::new(),
            stack: Vec::new(),
            resolved: HashMap::new(),
        }
    }

    fn resolve_record(&mut self, index: usize) -> Result<Value> {
        let records = self.records;
        let record = &records[index];
        let key = record.key();
        if self.index.get(&key) == Some(&index) {
            self.resolve_key(&key)
        } else {
            // A shadowed duplicate: its own value still gets resolved, but
            // lookups of its key go to the record that owns the slot.
            self.resolve_value(&record.value)
        }
    }

    fn resolve_key(&mut self, key: &str) -> Result<Value> {
        if let Some(value) = self.resolved.get(key) {
            return Ok(value.clone());
        }
        if self.visiting.contains(key) {
            let mut path = self.stack.clone();
            path.push(key.to_string());
            return Err(TokenError::CircularReference { path });
        }

        let records = self.records;
        let Some(&index) = self.index.get(key) else {
            return Ok(Value::String(format!("{{{}}}", key)));
        };

        self.visiting.insert(key.to_string());
        self.stack.push(key.to_string());
        let value = self.resolve_value(&records[index].value)?;
        self.stack.pop();
        self.visiting.remove(key);

        self.resolved.insert(key.to_string(), value.clone());
        Ok(value)
    }

    fn resolve_value(&mut self, value: &Value) -> Result<Value> {
        match value {
            Value::String(s) => match alias_target(s) {
                Some(target) if self.index.contains_key(target) => {
                    tracing::trace!(reference = target, "substituting alias");
                    self.resolve_key(target)
                }
                Some(target) => {
                    tracing::debug!(reference = target, "leaving unresolvable alias as-is");
                    Ok(value.clone())
                }
                None => Ok(value.clone()),
            },
            Value::Object(fields) => {
                let mut out = Map::with_capacity(fields.len());
                for (name, field) in fields {
                    out.insert(name.clone(), self.resolve_value(field)?);
                }
                Ok(Value::Object(out))
            }
            _ => Ok(value.clone()),
        }
    }
}
