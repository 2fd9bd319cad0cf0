pub mod slug;
pub mod builder;

pub use slug::{slugify, Anchors};
pub use builder::{build_outline, Outline, TocEntry, TocOptions};
