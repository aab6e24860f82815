//! X API write adapter for publishing tweets

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tweet_composer_domain::{PublishError, PublishResult, Publisher};

use super::oauth::{OAuthCredentials, OAuthSigner};

const DEFAULT_BASE_URL: &str = "https://api.twitter.com";

/// X API publisher for creating posts
pub struct XPublisher {
    client: Client,
    signer: Option<OAuthSigner>,
    base_url: String,
}

impl XPublisher {
    pub fn new(credentials: OAuthCredentials, timeout_secs: u64) -> Result<Self, PublishError> {
        Self::with_base_url(credentials, DEFAULT_BASE_URL.to_string(), timeout_secs)
    }

    pub fn with_base_url(
        credentials: OAuthCredentials,
        base_url: String,
        timeout_secs: u64,
    ) -> Result<Self, PublishError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| PublishError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            signer: Some(OAuthSigner::new(credentials)),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a disabled publisher; every publish fails and drafts are kept
    pub fn disabled() -> Self {
        Self {
            client: Client::new(),
            signer: None,
            base_url: String::new(),
        }
    }
}

#[derive(Serialize)]
struct CreateTweetRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct CreateTweetResponse {
    data: TweetData,
}

#[derive(Deserialize)]
struct TweetData {
    id: String,
}

#[async_trait]
impl Publisher for XPublisher {
    async fn publish(&self, text: &str) -> Result<PublishResult, PublishError> {
        let Some(signer) = &self.signer else {
            return Err(PublishError::Api("Publisher is disabled".to_string()));
        };

        let url = format!("{}/2/tweets", self.base_url);
        let authorization = signer.authorization_header("POST", &url, &[])?;

        let response = self
            .client
            .post(&url)
            .header("Authorization", authorization)
            .json(&CreateTweetRequest { text })
            .send()
            .await
            .map_err(|e| PublishError::Api(e.to_string()))?;

        if response.status() == 401 || response.status() == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Auth(format!("Rejected credentials: {}", body)));
        }

        if response.status() == 429 {
            return Err(PublishError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Api(format!(
                "Failed to create tweet ({}): {}",
                status, body
            )));
        }

        let tweet_response: CreateTweetResponse = response
            .json()
            .await
            .map_err(|e| PublishError::Api(e.to_string()))?;

        Ok(PublishResult {
            url: Some(format!("https://x.com/i/status/{}", tweet_response.data.id)),
            id: tweet_response.data.id,
        })
    }

    fn is_enabled(&self) -> bool {
        self.signer.is_some()
    }

    fn platform(&self) -> &'static str {
        "x"
    }
}
