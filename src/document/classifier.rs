use serde_json::Value;
use log::debug;

use crate::document::node::{
    CodeRef, ContentNode, ImageRef, InlineSpan, ListItemBlock, ListKind, Mark,
    TableRef, TableRow, TextBlock, TextStyle,
};

/// Classify one raw node from the content store into a typed `ContentNode`.
///
/// Returns `None` for nodes of an unrecognized kind or with an unusable
/// shape. Unknown kinds are a normal occurrence when the store schema grows
/// ahead of this renderer, so they are skipped silently rather than treated
/// as errors.
pub fn classify(raw: &Value) -> Option<ContentNode> {
    let kind = raw.get("_type").and_then(Value::as_str)?;
    let key = raw.get("_key").and_then(Value::as_str)?.to_string();

    match kind {
        "block" => classify_block(raw, key),
        "image" => classify_image(raw, key),
        "customTable" => classify_table(raw, key),
        "codeBlock" => classify_code(raw, key),
        other => {
            debug!("Skipping node {} of unrecognized kind '{}'", key, other);
            None
        }
    }
}

/// Classify every element of a raw document body, dropping unrecognized nodes
pub fn classify_document(body: &[Value]) -> Vec<ContentNode> {
    body.iter().filter_map(classify).collect()
}

fn classify_block(raw: &Value, key: String) -> Option<ContentNode> {
    let spans = collect_spans(raw);

    // A block with a listItem field is a flat list item, not a paragraph
    if let Some(list_item) = raw.get("listItem").and_then(Value::as_str) {
        let kind = match list_item {
            "bullet" => ListKind::Bullet,
            "number" => ListKind::Number,
            other => {
                debug!("Skipping list item {} with unknown list kind '{}'", key, other);
                return None;
            }
        };
        // Authored nesting level; absent means top level
        let level = raw.get("level").and_then(Value::as_u64).unwrap_or(0) as u32;
        return Some(ContentNode::ListItem(ListItemBlock { key, kind, level, spans }));
    }

    let style = match raw.get("style").and_then(Value::as_str).unwrap_or("normal") {
        "normal" => TextStyle::Normal,
        "h1" => TextStyle::H1,
        "h2" => TextStyle::H2,
        "h3" => TextStyle::H3,
        "h4" => TextStyle::H4,
        "blockquote" => TextStyle::Blockquote,
        // Styles this renderer does not know (h5, lead, ...) still carry
        // author text, so fall back to a plain paragraph instead of dropping it
        _ => TextStyle::Normal,
    };

    Some(ContentNode::Text(TextBlock { key, style, spans }))
}

/// Gather the typed spans of a block, resolving link mark references
/// against the block's mark definitions.
fn collect_spans(raw: &Value) -> Vec<InlineSpan> {
    let mark_defs = raw.get("markDefs").and_then(Value::as_array);

    let children = match raw.get("children").and_then(Value::as_array) {
        Some(children) => children,
        None => return Vec::new(),
    };

    children
        .iter()
        .filter(|child| child.get("_type").and_then(Value::as_str) == Some("span"))
        .map(|child| {
            let text = child.get("text").and_then(Value::as_str).unwrap_or("").to_string();
            let mut marks = Vec::new();
            let mut link = None;

            if let Some(raw_marks) = child.get("marks").and_then(Value::as_array) {
                for mark in raw_marks.iter().filter_map(Value::as_str) {
                    match mark {
                        "strong" => marks.push(Mark::Strong),
                        "em" => marks.push(Mark::Em),
                        "code" => marks.push(Mark::Code),
                        "underline" => marks.push(Mark::Underline),
                        "strike-through" => marks.push(Mark::StrikeThrough),
                        // Anything else is a reference into markDefs
                        def_key => {
                            if let Some(href) = resolve_link(mark_defs, def_key) {
                                link = Some(href);
                            }
                        }
                    }
                }
            }

            InlineSpan { text, marks, link }
        })
        .collect()
}

fn resolve_link(mark_defs: Option<&Vec<Value>>, def_key: &str) -> Option<String> {
    let defs = mark_defs?;
    defs.iter()
        .find(|def| {
            def.get("_key").and_then(Value::as_str) == Some(def_key)
                && def.get("_type").and_then(Value::as_str) == Some("link")
        })
        .and_then(|def| def.get("href").and_then(Value::as_str))
        .map(str::to_string)
}

fn classify_image(raw: &Value, key: String) -> Option<ContentNode> {
    // The asset reference may sit directly on the node or under `asset`
    let asset_ref = raw
        .get("asset")
        .and_then(|asset| asset.get("_ref"))
        .or_else(|| raw.get("_ref"))
        .and_then(Value::as_str)?
        .to_string();

    let alt = raw.get("alt").and_then(Value::as_str).map(str::to_string);
    let caption = raw.get("caption").and_then(Value::as_str).map(str::to_string);

    Some(ContentNode::Image(ImageRef { key, asset_ref, alt, caption }))
}

fn classify_table(raw: &Value, key: String) -> Option<ContentNode> {
    let rows = raw
        .get("tableData")
        .and_then(Value::as_array)?
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let row_key = row
                .get("_key")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("row-{}", i));
            let cells = row
                .get("cells")
                .and_then(Value::as_array)
                .map(|cells| {
                    cells
                        .iter()
                        .map(|cell| cell.as_str().unwrap_or("").to_string())
                        .collect()
                })
                .unwrap_or_default();
            TableRow { key: row_key, cells }
        })
        .collect();

    let theme_color = raw.get("themeColor").and_then(Value::as_str).map(str::to_string);

    Some(ContentNode::Table(TableRef { key, rows, theme_color }))
}

fn classify_code(raw: &Value, key: String) -> Option<ContentNode> {
    let code = raw.get("code").and_then(Value::as_str)?.to_string();
    let language = raw.get("language").and_then(Value::as_str).map(str::to_string);
    let filename = raw.get("filename").and_then(Value::as_str).map(str::to_string);

    Some(ContentNode::Code(CodeRef { key, code, language, filename }))
}
