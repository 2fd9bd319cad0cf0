use crate::document::node::ContentNode;

/// Concatenate the plain text of every text and list item block in a
/// document, marks stripped, separated by single spaces.
pub fn extract_plain_text(doc: &[ContentNode]) -> String {
    let mut text = String::new();

    for node in doc {
        let spans = match node {
            ContentNode::Text(block) => &block.spans,
            ContentNode::ListItem(item) => &item.spans,
            _ => continue,
        };

        for span in spans {
            if !span.text.is_empty() {
                text.push_str(&span.text);
                text.push(' ');
            }
        }
    }

    text
}

/// Extract a summary (first n characters) from the first text block of a
/// document, used as the meta description of a rendered page. Later blocks
/// never bleed into the summary.
pub fn extract_summary(doc: &[ContentNode], length: usize) -> String {
    let first_block = doc.iter().find_map(|node| match node {
        ContentNode::Text(block) => Some(block.plain_text()),
        _ => None,
    });
    let first_block = first_block.unwrap_or_default();
    let trimmed = first_block.trim();

    if trimmed.chars().count() <= length {
        return trimmed.to_string();
    }

    let truncated: String = trimmed.chars().take(length).collect();

    // Try to find a sensible breakpoint (sentence or word boundary)
    for terminator in ['.', '!', '?'] {
        if let Some(pos) = truncated.rfind(terminator) {
            return truncated[..=pos].to_string();
        }
    }

    if let Some(pos) = truncated.rfind(' ') {
        truncated[..pos].to_string() + "..."
    } else {
        truncated + "..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::{InlineSpan, TextBlock, TextStyle};

    fn paragraph(key: &str, text: &str) -> ContentNode {
        ContentNode::Text(TextBlock {
            key: key.to_string(),
            style: TextStyle::Normal,
            spans: vec![InlineSpan::plain(text)],
        })
    }

    #[test]
    fn test_extract_plain_text_joins_blocks() {
        let doc = vec![paragraph("a", "Hello"), paragraph("b", "world")];
        assert_eq!(extract_plain_text(&doc).trim(), "Hello world");
    }

    #[test]
    fn test_summary_short_text_is_untruncated() {
        let doc = vec![paragraph("a", "Short enough.")];
        assert_eq!(extract_summary(&doc, 160), "Short enough.");
    }

    #[test]
    fn test_summary_uses_only_the_first_text_block() {
        let doc = vec![
            paragraph("a", "An opening paragraph."),
            ContentNode::Text(TextBlock {
                key: "h".to_string(),
                style: TextStyle::H2,
                spans: vec![InlineSpan::plain("Section")],
            }),
            paragraph("b", "A later paragraph that must not appear."),
        ];
        assert_eq!(extract_summary(&doc, 160), "An opening paragraph.");
    }

    #[test]
    fn test_summary_of_empty_document_is_empty() {
        assert_eq!(extract_summary(&[], 160), "");
    }

    #[test]
    fn test_summary_breaks_at_sentence() {
        let doc = vec![paragraph(
            "a",
            "First sentence is here. Second sentence keeps going well past the cut.",
        )];
        let summary = extract_summary(&doc, 30);
        assert_eq!(summary, "First sentence is here.");
    }
}
