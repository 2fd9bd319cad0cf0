use std::path::PathBuf;
use serde::{Serialize, Deserialize};

use crate::config::defaults;
use crate::toc::TocOptions;

/// Connection settings for the hosted content store.
///
/// Project and dataset identifiers are process-wide read-only configuration;
/// they are carried here explicitly and passed into the client, never read
/// from ambient globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Content store project identifier
    #[serde(default)]
    pub project_id: String,

    /// Dataset within the project
    #[serde(default = "defaults::default_dataset")]
    pub dataset: String,

    /// Query API version date
    #[serde(default = "defaults::default_api_version")]
    pub api_version: String,

    /// Whether to query through the CDN edge instead of the live API
    #[serde(default)]
    pub use_cdn: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            project_id: String::new(),
            dataset: defaults::default_dataset(),
            api_version: defaults::default_api_version(),
            use_cdn: false,
        }
    }
}

/// Site configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Content store connection settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Destination directory for generated pages
    #[serde(default = "defaults::default_destination")]
    pub destination: PathBuf,

    /// Public base URL for the site (used in sitemap and share links)
    #[serde(default = "defaults::default_base_url")]
    pub base_url: String,

    /// Site title
    #[serde(default = "defaults::default_site_title")]
    pub title: String,

    /// Site description
    #[serde(default = "defaults::default_site_description")]
    pub description: String,

    /// Table of contents options
    #[serde(default)]
    pub toc: TocOptions,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store: StoreConfig::default(),
            destination: defaults::default_destination(),
            base_url: defaults::default_base_url(),
            title: defaults::default_site_title(),
            description: defaults::default_site_description(),
            toc: TocOptions::default(),
        }
    }
}

impl Config {
    /// Absolute URL for a post page under the configured base URL
    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), slug)
    }
}
