//! Guide tokenization for prefix indexing.

use serde_json::Value;

use crate::model::{Attachment, Category, Guide};

/// Collects every scalar leaf of a JSON tree as its display string.
///
/// Null contributes nothing; arrays and maps recurse. Key paths are
/// irrelevant to indexing, only the values matter.
fn collect_leaves(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push(b.to_string()),
        Value::Number(n) => out.push(n.to_string()),
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => {
            for item in items {
                collect_leaves(item, out);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                collect_leaves(item, out);
            }
        }
    }
}

/// Flattens one guide plus its owning category's display name and
/// description into a single space-joined string.
fn searchable_text(guide: &Guide, category: &Category) -> String {
    let mut leaves = vec![guide.name.clone()];
    if let Some(obsolete) = &guide.obsolete {
        leaves.push(obsolete.clone());
    }
    leaves.extend(guide.fams.iter().cloned());
    leaves.extend(guide.builds.iter().cloned());
    for attachment in &guide.attachments {
        match attachment {
            Attachment::File {
                filename,
                contenttype,
            } => {
                leaves.push(filename.clone());
                leaves.push(contenttype.clone());
            }
            Attachment::Markdown { filename } => leaves.push(filename.clone()),
            Attachment::Link { link } => leaves.push(link.clone()),
        }
    }
    for value in guide.extra.values() {
        collect_leaves(value, &mut leaves);
    }
    leaves.push(category.display_name());
    leaves.push(category.description.clone());
    leaves.join(" ")
}

/// Lowercases and replaces every non-ASCII-alphanumeric character with a
/// space, collapsing runs and trimming the ends. The result splits cleanly
/// on single spaces, so multi-word queries keep their word boundaries.
pub(crate) fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_space = true;
        }
    }
    out
}

/// Tokenizes one guide: flatten, normalize, split. Tokens shorter than
/// `min_len` are dropped; duplicates are kept (the index deduplicates).
///
/// Pure function of its inputs, in particular independent of any other
/// guide in the collection.
pub(crate) fn tokenize(guide: &Guide, category: &Category, min_len: usize) -> Vec<String> {
    normalize(&searchable_text(guide, category))
        .split(' ')
        .filter(|token| token.len() >= min_len)
        .map(str::to_string)
        .collect()
}
