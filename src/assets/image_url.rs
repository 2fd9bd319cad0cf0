use regex::Regex;
use lazy_static::lazy_static;

use crate::document::ImageRef;

lazy_static! {
    // Asset references look like `image-<id>-<width>x<height>-<format>`
    static ref IMAGE_REF_REGEX: Regex =
        Regex::new(r"^image-([A-Za-z0-9]+)-(\d+)x(\d+)-([a-z0-9]+)$").unwrap();
}

/// Resolves opaque asset references to fetchable URLs.
///
/// The render pipeline only ever asks for a URL; when none can be produced
/// the image is omitted from the output rather than failing the render.
pub trait AssetResolver {
    /// URL for an image at the requested display size, or None if the
    /// reference cannot be resolved
    fn image_url(&self, image: &ImageRef, width: u32, height: u32) -> Option<String>;
}

/// Resolver backed by the content store's image CDN
#[derive(Debug, Clone)]
pub struct CdnResolver {
    project_id: String,
    dataset: String,
}

impl CdnResolver {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        CdnResolver {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }
}

impl AssetResolver for CdnResolver {
    fn image_url(&self, image: &ImageRef, width: u32, height: u32) -> Option<String> {
        if self.project_id.is_empty() || self.dataset.is_empty() {
            return None;
        }

        let caps = IMAGE_REF_REGEX.captures(&image.asset_ref)?;
        let id = &caps[1];
        let source_dims = format!("{}x{}", &caps[2], &caps[3]);
        let format = &caps[4];

        Some(format!(
            "https://cdn.sanity.io/images/{}/{}/{}-{}.{}?w={}&h={}&fit=crop",
            self.project_id, self.dataset, id, source_dims, format, width, height
        ))
    }
}

/// Resolver that never produces a URL. Used where image output should be
/// suppressed entirely, e.g. plain-text oriented commands.
#[derive(Debug, Clone, Default)]
pub struct NullResolver;

impl AssetResolver for NullResolver {
    fn image_url(&self, _image: &ImageRef, _width: u32, _height: u32) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(asset_ref: &str) -> ImageRef {
        ImageRef {
            key: "i1".to_string(),
            asset_ref: asset_ref.to_string(),
            alt: None,
            caption: None,
        }
    }

    #[test]
    fn test_cdn_resolver_builds_url() {
        let resolver = CdnResolver::new("abc123", "production");
        let url = resolver
            .image_url(&image("image-d5c1f3ab01-1200x800-jpg"), 800, 450)
            .unwrap();

        assert_eq!(
            url,
            "https://cdn.sanity.io/images/abc123/production/d5c1f3ab01-1200x800.jpg?w=800&h=450&fit=crop"
        );
    }

    #[test]
    fn test_malformed_ref_resolves_to_none() {
        let resolver = CdnResolver::new("abc123", "production");
        assert!(resolver.image_url(&image("file-whatever-pdf"), 800, 450).is_none());
        assert!(resolver.image_url(&image("image-missing-dims-jpg"), 800, 450).is_none());
        assert!(resolver.image_url(&image(""), 800, 450).is_none());
    }

    #[test]
    fn test_unconfigured_resolver_resolves_to_none() {
        let resolver = CdnResolver::new("", "");
        assert!(resolver.image_url(&image("image-d5c1f3ab01-1200x800-jpg"), 800, 450).is_none());
    }
}
