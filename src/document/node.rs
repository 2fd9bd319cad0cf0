use serde::{Serialize, Deserialize};

/// Block style of a text block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    Normal,
    H1,
    H2,
    H3,
    H4,
    Blockquote,
}

impl TextStyle {
    /// Heading level for h1..h4 styles, None for everything else
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            TextStyle::H1 => Some(1),
            TextStyle::H2 => Some(2),
            TextStyle::H3 => Some(3),
            TextStyle::H4 => Some(4),
            _ => None,
        }
    }
}

/// Kind of a rendered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Number,
}

/// Inline decoration applied to a span of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mark {
    Strong,
    Em,
    Code,
    Underline,
    StrikeThrough,
}

/// One run of text inside a block, with its decorations resolved.
///
/// Link marks arrive in the source as references into the block's mark
/// definitions; by the time a span reaches this type the reference has been
/// resolved to the target href.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineSpan {
    pub text: String,
    #[serde(default)]
    pub marks: Vec<Mark>,
    #[serde(default)]
    pub link: Option<String>,
}

impl InlineSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        InlineSpan { text: text.into(), marks: Vec::new(), link: None }
    }
}

/// A paragraph, heading or blockquote block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub key: String,
    pub style: TextStyle,
    pub spans: Vec<InlineSpan>,
}

impl TextBlock {
    /// Concatenated plain text of all spans, marks stripped, link text kept
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A single list item. The source stores list items flat, in document
/// order; adjacency of same-kind items is the only grouping signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItemBlock {
    pub key: String,
    pub kind: ListKind,
    /// Nesting depth declared by the author; 0 when the source omits it
    pub level: u32,
    pub spans: Vec<InlineSpan>,
}

/// Reference to an image asset in the content store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub key: String,
    /// Opaque asset reference, e.g. `image-<id>-<w>x<h>-<ext>`
    pub asset_ref: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

/// One row of an embedded table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub key: String,
    pub cells: Vec<String>,
}

/// An embedded table. The first row is the header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRef {
    pub key: String,
    pub rows: Vec<TableRow>,
    #[serde(default)]
    pub theme_color: Option<String>,
}

/// An embedded code block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeRef {
    pub key: String,
    pub code: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

/// One element of the authored document tree.
///
/// This is a closed union: node kinds the classifier does not recognize
/// never construct a `ContentNode` at all, so downstream matches can stay
/// exhaustive without an escape hatch for arbitrary shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentNode {
    Text(TextBlock),
    ListItem(ListItemBlock),
    Image(ImageRef),
    Table(TableRef),
    Code(CodeRef),
}

impl ContentNode {
    /// Stable per-document key assigned at authoring time
    pub fn key(&self) -> &str {
        match self {
            ContentNode::Text(b) => &b.key,
            ContentNode::ListItem(b) => &b.key,
            ContentNode::Image(b) => &b.key,
            ContentNode::Table(b) => &b.key,
            ContentNode::Code(b) => &b.key,
        }
    }
}
