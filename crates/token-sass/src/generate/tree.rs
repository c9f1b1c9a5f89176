//! Nested map output.
//!
//! Records are folded into an ordered prefix tree keyed by raw path segments.
//! Top-level entries keep first-seen order; a later record at the same path
//! replaces the earlier one in place.

use crate::convert::convert;
use crate::naming::sanitize_segment;
use crate::token::TokenRecord;

const INDENT: &str = "  ";

enum Node<'a> {
    Leaf(&'a TokenRecord),
    Group(Vec<(String, Node<'a>)>),
}

fn insert<'a>(children: &mut Vec<(String, Node<'a>)>, path: &[String], record: &'a TokenRecord) {
    let Some((head, rest)) = path.split_first() else {
        return;
    };

    let index = match children.iter().position(|(key, _)| key == head) {
        Some(index) => index,
        None => {
            children.push((head.clone(), Node::Group(Vec::new())));
            children.len() - 1
        }
    };
    let node = &mut children[index].1;

    if rest.is_empty() {
        *node = Node::Leaf(record);
        return;
    }
    if let Node::Leaf(_) = node {
        *node = Node::Group(Vec::new());
    }
    if let Node::Group(grandchildren) = node {
        insert(grandchildren, rest, record);
    }
}

pub(super) fn generate_maps(records: &[TokenRecord]) -> String {
    let mut roots: Vec<(String, Node<'_>)> = Vec::new();
    for record in records {
        insert(&mut roots, &record.path, record);
    }

    let declarations: Vec<String> = roots
        .iter()
        .map(|(key, node)| {
            let name = sanitize_segment(key);
            match node {
                Node::Leaf(record) => {
                    format!("${}: {};", name, convert(&record.value, record.token_type))
                }
                Node::Group(children) => {
                    let mut out = format!("${}: (\n", name);
                    render_entries(children, 1, &mut out);
                    out.push_str(");");
                    out
                }
            }
        })
        .collect();

    let mut out = declarations.join("\n\n");
    out.push('\n');
    out
}

fn render_entries(children: &[(String, Node<'_>)], depth: usize, out: &mut String) {
    let indent = INDENT.repeat(depth);
    for (key, node) in children {
        let name = map_key(key);
        match node {
            Node::Leaf(record) => {
                let value = convert(&record.value, record.token_type);
                let value = value.replace('\n', &format!("\n{}", indent));
                out.push_str(&format!("{}{}: {},\n", indent, name, value));
            }
            Node::Group(grandchildren) => {
                out.push_str(&format!("{}{}: (\n", indent, name));
                render_entries(grandchildren, depth + 1, out);
                out.push_str(&format!("{}),\n", indent));
            }
        }
    }
}

/// Map keys that sanitize to nothing are kept as quoted strings.
fn map_key(key: &str) -> String {
    let name = sanitize_segment(key);
    if name.is_empty() {
        format!("\"{}\"", key.replace('"', "\\\""))
    } else {
        name
    }
}
