use log::debug;
use serde_json::Value;

use crate::config::StoreConfig;
use crate::content::model::{Post, PostSummary};
use crate::content::query;
use crate::utils::error::{BoxResult, PetalpressError};

/// Environment variable holding the read token for draft access
const READ_TOKEN_ENV: &str = "PETALPRESS_READ_TOKEN";

/// The content store's distinction between published and draft document
/// states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    Published,
    /// Raw perspective also returns draft documents
    Raw,
}

impl Perspective {
    fn as_str(&self) -> &'static str {
        match self {
            Perspective::Published => "published",
            Perspective::Raw => "raw",
        }
    }
}

/// HTTP client for the hosted content store's query API
pub struct StoreClient {
    http: reqwest::Client,
    config: StoreConfig,
    token: Option<String>,
}

impl StoreClient {
    /// Create a client for the configured project and dataset. The read
    /// token, needed only for draft access, comes from the environment.
    pub fn new(config: &StoreConfig) -> Self {
        StoreClient {
            http: reqwest::Client::new(),
            config: config.clone(),
            token: std::env::var(READ_TOKEN_ENV).ok(),
        }
    }

    /// Query endpoint for the configured project and dataset
    fn endpoint(&self) -> String {
        let host = if self.config.use_cdn { "apicdn.sanity.io" } else { "api.sanity.io" };
        format!(
            "https://{}.{}/v{}/data/query/{}",
            self.config.project_id, host, self.config.api_version, self.config.dataset
        )
    }

    /// Run one GROQ query and return the raw `result` value
    async fn run_query(
        &self,
        groq: &str,
        params: &[(&str, &str)],
        perspective: Perspective,
    ) -> BoxResult<Value> {
        if self.config.project_id.is_empty() {
            return Err(PetalpressError::Config(
                "store.project_id is not configured".to_string()
            ).into());
        }

        let mut request = self
            .http
            .get(self.endpoint())
            .query(&[("query", groq), ("perspective", perspective.as_str())]);

        // Parameter values travel as JSON literals
        for (name, value) in params {
            let json_value = serde_json::to_string(value)
                .map_err(|e| PetalpressError::Fetch(format!("Failed to encode parameter: {}", e)))?;
            request = request.query(&[(format!("${}", name), json_value)]);
        }

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        debug!("Querying content store ({} perspective)", perspective.as_str());
        let response = request
            .send()
            .await
            .map_err(|e| PetalpressError::Fetch(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PetalpressError::Fetch(format!(
                "Content store returned {}: {}", status, body
            )).into());
        }

        let mut envelope: Value = response
            .json()
            .await
            .map_err(|e| PetalpressError::Fetch(format!("Invalid response body: {}", e)))?;

        Ok(envelope
            .get_mut("result")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }

    /// Fetch one post by slug.
    ///
    /// A missing post is an explicit `Ok(None)`, not an error; the caller
    /// decides how to present the absence. With `include_drafts` the raw
    /// perspective is used so unpublished revisions are visible.
    pub async fn fetch_post(&self, slug: &str, include_drafts: bool) -> BoxResult<Option<Post>> {
        let (groq, perspective) = if include_drafts {
            (query::POST_BY_SLUG_WITH_DRAFTS, Perspective::Raw)
        } else {
            (query::POST_BY_SLUG, Perspective::Published)
        };

        let result = self.run_query(groq, &[("slug", slug)], perspective).await?;
        if result.is_null() {
            return Ok(None);
        }

        let post = serde_json::from_value(result)
            .map_err(|e| PetalpressError::Document(format!("Failed to decode post: {}", e)))?;
        Ok(Some(post))
    }

    /// Fetch summaries of every published post, newest first
    pub async fn fetch_post_summaries(&self) -> BoxResult<Vec<PostSummary>> {
        let result = self
            .run_query(query::ALL_POST_SUMMARIES, &[], Perspective::Published)
            .await?;
        if result.is_null() {
            return Ok(Vec::new());
        }

        let summaries = serde_json::from_value(result)
            .map_err(|e| PetalpressError::Document(format!("Failed to decode post list: {}", e)))?;
        Ok(summaries)
    }
}
