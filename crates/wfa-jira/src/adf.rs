//! Plain-text extraction from Atlassian Document Format (ADF) nodes

use serde_json::{Map, Value};

/// Flatten an ADF node (or a plain string, or a list of nodes) into text.
///
/// - absent / null: empty string
/// - string: returned unchanged
/// - list: each element extracted, non-empty results joined with `\n`
/// - `{"type": "text"}` node: its `text` field
/// - node with `content`: children extracted and concatenated
/// - anything else: its JSON form
///
/// Malformed nodes degrade to an empty string instead of failing.
pub fn extract_text(node: Option<&Value>) -> String {
    match node {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| extract_text(Some(item)))
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
        Some(Value::Object(fields)) => extract_object(fields),
        Some(other) => other.to_string(),
    }
}

fn extract_object(fields: &Map<String, Value>) -> String {
    if fields.get("type").and_then(Value::as_str) == Some("text") {
        return fields
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
    }

    match fields.get("content") {
        None | Some(Value::Null) => String::new(),
        Some(Value::Array(children)) => children
            .iter()
            .map(|child| extract_text(Some(child)))
            .collect(),
        Some(other) => extract_text(Some(other)),
    }
}
