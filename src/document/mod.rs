pub mod node;
pub mod classifier;
pub mod text;

pub use node::{
    CodeRef, ContentNode, ImageRef, InlineSpan, ListItemBlock, ListKind, Mark,
    TableRef, TableRow, TextBlock, TextStyle,
};
pub use classifier::{classify, classify_document};
pub use text::{extract_plain_text, extract_summary};
