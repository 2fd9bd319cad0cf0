use serde::{Serialize, Deserialize};
use std::collections::HashMap;

use crate::document::{ContentNode, TextStyle};
use crate::toc::slug::Anchors;

/// One heading in the table of contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Key of the heading block this entry was derived from
    pub key: String,
    pub anchor_id: String,
    pub text: String,
    pub level: u8,
}

fn default_min_level() -> u8 {
    2
}

fn default_max_level() -> u8 {
    3
}

fn default_min_h2_entries() -> usize {
    2
}

/// Options controlling which headings the displayed outline includes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocOptions {
    /// Minimum heading level shown in the outline (h2 = 2)
    #[serde(default = "default_min_level")]
    pub min_level: u8,
    /// Maximum heading level shown in the outline
    #[serde(default = "default_max_level")]
    pub max_level: u8,
    /// Minimum number of level-2 entries before the outline is shown at all
    #[serde(default = "default_min_h2_entries")]
    pub min_h2_entries: usize,
}

impl Default for TocOptions {
    fn default() -> Self {
        TocOptions {
            min_level: default_min_level(),
            max_level: default_max_level(),
            min_h2_entries: default_min_h2_entries(),
        }
    }
}

/// The derived outline of one document.
///
/// Anchors are assigned to every h1..h4 heading in a single in-order pass,
/// regardless of the display range, so heading ids never shift when the
/// displayed level range changes. Recomputed on every render, never stored.
#[derive(Debug, Clone)]
pub struct Outline {
    entries: Vec<TocEntry>,
    anchors_by_key: HashMap<String, String>,
    options: TocOptions,
}

impl Outline {
    /// Walk the document once and collect its headings
    pub fn build(doc: &[ContentNode], options: &TocOptions) -> Outline {
        let mut anchors = Anchors::new();
        let mut entries = Vec::new();
        let mut anchors_by_key = HashMap::new();

        for (index, node) in doc.iter().enumerate() {
            let block = match node {
                ContentNode::Text(block) => block,
                _ => continue,
            };
            let level = match block.style.heading_level() {
                Some(level) => level,
                None => continue,
            };

            let text = block.plain_text().trim().to_string();
            if text.is_empty() {
                continue;
            }

            let anchor_id = anchors.assign(&text, index);
            anchors_by_key.insert(block.key.clone(), anchor_id.clone());
            entries.push(TocEntry {
                key: block.key.clone(),
                anchor_id,
                text,
                level,
            });
        }

        Outline {
            entries,
            anchors_by_key,
            options: options.clone(),
        }
    }

    /// Anchor id assigned to the heading block with the given key
    pub fn anchor_for(&self, key: &str) -> Option<&str> {
        self.anchors_by_key.get(key).map(String::as_str)
    }

    /// Entries within the configured display range, in document order
    pub fn visible_entries(&self) -> Vec<TocEntry> {
        self.entries
            .iter()
            .filter(|e| e.level >= self.options.min_level && e.level <= self.options.max_level)
            .cloned()
            .collect()
    }

    /// Whether the outline is worth rendering: a degenerate outline with
    /// fewer than the configured number of level-2 entries is suppressed.
    pub fn should_display(&self) -> bool {
        let h2_count = self.entries.iter().filter(|e| e.level == 2).count();
        h2_count >= self.options.min_h2_entries
    }

    /// All collected entries, unfiltered
    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    /// Render the visible outline as a markdown list
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        let min_level = self.options.min_level;

        for entry in self.visible_entries() {
            let indent = "  ".repeat(entry.level.saturating_sub(min_level) as usize);
            md.push_str(&format!("{}* [{}](#{})\n", indent, entry.text, entry.anchor_id));
        }

        md
    }
}

/// Build the outline for a document with the given options
pub fn build_outline(doc: &[ContentNode], options: &TocOptions) -> Outline {
    Outline::build(doc, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{InlineSpan, TextBlock};

    fn heading(key: &str, style: TextStyle, text: &str) -> ContentNode {
        ContentNode::Text(TextBlock {
            key: key.to_string(),
            style,
            spans: vec![InlineSpan::plain(text)],
        })
    }

    #[test]
    fn test_partial_options_fall_back_to_defaults() {
        let options: TocOptions =
            serde_json::from_value(serde_json::json!({ "max_level": 4 })).unwrap();
        assert_eq!(options.min_level, 2);
        assert_eq!(options.max_level, 4);
        assert_eq!(options.min_h2_entries, 2);
    }

    #[test]
    fn test_outline_collects_headings_in_order() {
        let doc = vec![
            heading("a", TextStyle::H1, "Title"),
            heading("b", TextStyle::H2, "Intro"),
            heading("c", TextStyle::Normal, "not a heading"),
            heading("d", TextStyle::H3, "Details"),
        ];

        let outline = Outline::build(&doc, &TocOptions::default());
        let texts: Vec<&str> = outline.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Title", "Intro", "Details"]);
    }

    #[test]
    fn test_visible_entries_respect_level_range() {
        let doc = vec![
            heading("a", TextStyle::H1, "Title"),
            heading("b", TextStyle::H2, "Intro"),
            heading("c", TextStyle::H4, "Fine print"),
        ];

        let outline = Outline::build(&doc, &TocOptions::default());
        let visible: Vec<u8> = outline.visible_entries().iter().map(|e| e.level).collect();
        assert_eq!(visible, vec![2]);
    }

    #[test]
    fn test_single_h2_suppresses_outline() {
        let doc = vec![
            heading("a", TextStyle::H2, "Only one"),
            heading("b", TextStyle::H3, "Sub"),
        ];

        let outline = Outline::build(&doc, &TocOptions::default());
        assert_eq!(outline.entries().len(), 2);
        assert!(!outline.should_display());
    }

    #[test]
    fn test_duplicate_heading_text_gets_distinct_anchors() {
        let doc = vec![
            heading("a", TextStyle::H2, "Setup"),
            heading("b", TextStyle::H2, "Setup"),
        ];

        let outline = Outline::build(&doc, &TocOptions::default());
        assert_eq!(outline.anchor_for("a"), Some("setup"));
        assert_eq!(outline.anchor_for("b"), Some("setup-2"));
        assert!(outline.should_display());
    }

    #[test]
    fn test_empty_heading_text_is_skipped() {
        let doc = vec![
            heading("a", TextStyle::H2, "   "),
            heading("b", TextStyle::H2, "Real"),
        ];

        let outline = Outline::build(&doc, &TocOptions::default());
        assert_eq!(outline.entries().len(), 1);
        assert_eq!(outline.entries()[0].key, "b");
    }

    #[test]
    fn test_outline_markdown_indents_by_level() {
        let doc = vec![
            heading("a", TextStyle::H2, "One"),
            heading("b", TextStyle::H3, "Nested"),
            heading("c", TextStyle::H2, "Two"),
        ];

        let outline = Outline::build(&doc, &TocOptions::default());
        let md = outline.to_markdown();
        assert!(md.contains("* [One](#one)"));
        assert!(md.contains("  * [Nested](#nested)"));
        assert!(md.contains("* [Two](#two)"));
    }
}
