// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outlines from a serialized rich-text editor state.
//!
//! Post bodies are stored as a Lexical editor state: a JSON tree under `root`
//! whose nodes carry a `type`, optional `children`, and for text nodes a
//! `text` field. Heading nodes have `"type": "heading"` and a `tag` such as
//! `"h2"`. Walking that tree lets server code emit the table of contents
//! without a rendered document.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde_json::Value;

use crate::error::LexicalError;
use crate::ids::IdSet;
use crate::slug::slugify;
use crate::types::{HeadingEntry, HeadingLevels};

/// Parse a serialized editor state and collect its headings.
///
/// ```
/// use waymark_outline::{HeadingLevels, outline_from_editor_json};
///
/// let state = r#"{"root": {"type": "root", "children": [
///     {"type": "heading", "tag": "h2", "children": [{"type": "text", "text": "Why Waymark"}]},
///     {"type": "paragraph", "children": [{"type": "text", "text": "Body"}]},
///     {"type": "heading", "tag": "h2", "children": [{"type": "text", "text": "Why Waymark"}]}
/// ]}}"#;
/// let entries = outline_from_editor_json(state, HeadingLevels::H2).unwrap();
/// assert_eq!(entries[0].id, "why-waymark");
/// assert_eq!(entries[1].id, "why-waymark-1");
/// ```
pub fn outline_from_editor_json(
    json: &str,
    levels: HeadingLevels,
) -> Result<Vec<HeadingEntry>, LexicalError> {
    let state: Value =
        serde_json::from_str(json).map_err(|e| LexicalError::Json(e.to_string()))?;
    if state.get("root").is_none() {
        return Err(LexicalError::MissingRoot);
    }
    Ok(outline_from_editor_state(&state, levels))
}

/// Collect headings of `levels` from an editor state, depth first in document order.
///
/// Headings whose text is blank are skipped. Ids are slugs made unique within
/// the returned list. A state without `root` yields no entries.
pub fn outline_from_editor_state(state: &Value, levels: HeadingLevels) -> Vec<HeadingEntry> {
    let mut entries = Vec::new();
    let mut ids = IdSet::new();
    if let Some(root) = state.get("root") {
        walk(root, levels, &mut ids, &mut entries);
    }
    entries
}

fn walk(node: &Value, levels: HeadingLevels, ids: &mut IdSet, out: &mut Vec<HeadingEntry>) {
    if node.get("type").and_then(Value::as_str) == Some("heading") {
        let wanted = node
            .get("tag")
            .and_then(Value::as_str)
            .is_some_and(|tag| levels.matches_tag(tag));
        if wanted {
            let mut text = String::new();
            collect_text(node, &mut text);
            let text = text.trim();
            if !text.is_empty() {
                let id = ids.claim(&slugify(text));
                out.push(HeadingEntry::new(id, text));
            }
        }
    }
    for child in children(node) {
        walk(child, levels, ids, out);
    }
}

fn collect_text(node: &Value, out: &mut String) {
    for child in children(node) {
        if let Some(text) = child.get("text").and_then(Value::as_str) {
            out.push_str(text);
        }
        collect_text(child, out);
    }
}

fn children(node: &Value) -> impl Iterator<Item = &Value> {
    node.get("children")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}
