use serde::{Serialize, Deserialize};

use crate::document::{InlineSpan, ListKind};
use crate::toc::TocEntry;

/// One item of a rendered list, carrying its declared nesting level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderListItem {
    pub level: u32,
    pub spans: Vec<InlineSpan>,
}

/// The presentational output tree.
///
/// Built fresh for every render of a document and never mutated afterwards;
/// the presentation layer maps each variant to concrete markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderNode {
    Paragraph {
        spans: Vec<InlineSpan>,
    },
    Heading {
        level: u8,
        /// In-page anchor; absent for headings with no usable text
        anchor_id: Option<String>,
        spans: Vec<InlineSpan>,
    },
    List {
        kind: ListKind,
        items: Vec<RenderListItem>,
    },
    Blockquote {
        spans: Vec<InlineSpan>,
    },
    Image {
        url: String,
        alt: String,
        caption: Option<String>,
        width: u32,
        height: u32,
    },
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
        theme_color: Option<String>,
    },
    CodeBlock {
        code: String,
        language: Option<String>,
        filename: Option<String>,
    },
    TableOfContents {
        entries: Vec<TocEntry>,
    },
}
