//! HTTP client for the story generation API
//!
//! This module implements the backend contract: `GET /api/story` for the
//! stored collection and `POST /api/story` to generate a new story. The
//! backend is an external collaborator; everything here is plain JSON over
//! HTTP with no retries and no request timeout.

use crate::config::ApiConfig;
use crate::error::{FabulaError, Result};
use crate::story::Story;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Backend contract consumed by the session core
///
/// The HTTP implementation talks to the real service; tests substitute an
/// in-memory fake.
#[async_trait]
pub trait StoryBackend: Send + Sync {
    /// Fetch the current snapshot of stored stories, newest first.
    async fn list_stories(&self) -> Result<Vec<Story>>;

    /// Submit a prompt and return the newly created story.
    ///
    /// Callers are expected to pass a trimmed, non-empty prompt; the
    /// backend rejects empty prompts with a 400.
    async fn generate_story(&self, prompt: &str) -> Result<Story>;
}

/// Request body for `POST /api/story`
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

/// HTTP implementation of [`StoryBackend`]
///
/// # Examples
///
/// ```no_run
/// use fabula::api::{StoryApiClient, StoryBackend};
/// use fabula::config::ApiConfig;
///
/// # async fn example() -> fabula::error::Result<()> {
/// let client = StoryApiClient::new(&ApiConfig::default())?;
/// let stories = client.list_stories().await?;
/// println!("{} stories", stories.len());
/// # Ok(())
/// # }
/// ```
pub struct StoryApiClient {
    client: Client,
    base_url: String,
}

impl StoryApiClient {
    /// Create a new client for the configured API base URL
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    pub fn new(config: &ApiConfig) -> Result<Self> {
        // No request timeout: a hung request suspends the caller rather
        // than failing, and the session stays busy until it resolves.
        let client = Client::builder()
            .user_agent(concat!("fabula/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FabulaError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        tracing::info!("Initialized story API client: base_url={}", base_url);

        Ok(Self { client, base_url })
    }

    /// The configured API origin
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/api/story", self.base_url)
    }

    /// Turn a non-success response into an API error carrying the body text.
    async fn error_from_response(response: reqwest::Response) -> FabulaError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        FabulaError::Api { status, message }
    }
}

#[async_trait]
impl StoryBackend for StoryApiClient {
    async fn list_stories(&self) -> Result<Vec<Story>> {
        let url = self.endpoint();
        tracing::debug!("Fetching stories: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!("Story listing request failed: {}", e);
            FabulaError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let err = Self::error_from_response(response).await;
            tracing::warn!("Story listing returned {}: {}", status, err.banner_text());
            return Err(err.into());
        }

        let stories: Vec<Story> = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse story list: {}", e);
            FabulaError::Http(e)
        })?;

        tracing::debug!("Fetched {} stories", stories.len());
        Ok(stories)
    }

    async fn generate_story(&self, prompt: &str) -> Result<Story> {
        let url = self.endpoint();
        tracing::debug!("Requesting story generation: prompt_len={}", prompt.len());

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest { prompt })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Story generation request failed: {}", e);
                FabulaError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let err = Self::error_from_response(response).await;
            tracing::error!("Story generation returned {}: {}", status, err.banner_text());
            return Err(err.into());
        }

        let story: Story = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse generated story: {}", e);
            FabulaError::Http(e)
        })?;

        tracing::debug!("Generated story id={} for prompt={:?}", story.id, prompt);
        Ok(story)
    }
}
