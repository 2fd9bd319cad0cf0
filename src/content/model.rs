use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::document::{classify_document, ContentNode, ImageRef};

/// Slug object as stored by the content store
#[derive(Debug, Clone, Deserialize)]
pub struct Slug {
    pub current: String,
}

/// A full post document fetched from the content store
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Raw hero image node, if the post has one
    #[serde(default)]
    pub image: Option<Value>,
    /// Raw portable-text body; classified on demand
    #[serde(default)]
    pub body: Vec<Value>,
}

impl Post {
    /// Classify the raw body into typed content nodes, dropping anything
    /// this renderer does not recognize
    pub fn document(&self) -> Vec<ContentNode> {
        classify_document(&self.body)
    }

    /// Hero image reference, when the post carries a resolvable one
    pub fn hero_image(&self) -> Option<ImageRef> {
        let image = self.image.as_ref()?;
        let asset_ref = image
            .get("asset")
            .and_then(|asset| asset.get("_ref"))
            .and_then(Value::as_str)?
            .to_string();

        Some(ImageRef {
            key: "hero".to_string(),
            asset_ref,
            alt: image.get("alt").and_then(Value::as_str).map(str::to_string),
            caption: image.get("caption").and_then(Value::as_str).map(str::to_string),
        })
    }
}

/// Slimmer projection used for listings and the sitemap
#[derive(Debug, Clone, Deserialize)]
pub struct PostSummary {
    pub title: Option<String>,
    pub slug: Slug,
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<DateTime<Utc>>,
}
