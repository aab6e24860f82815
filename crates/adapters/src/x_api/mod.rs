//! X (Twitter) API adapters

mod oauth;
mod write;

pub use oauth::{OAuthCredentials, OAuthSigner};
pub use write::XPublisher;

use async_trait::async_trait;
use std::sync::Mutex;
use tweet_composer_domain::{PublishError, PublishResult, Publisher};

/// Stub publisher for testing and offline mode
pub struct StubPublisher {
    fail: bool,
    published: Mutex<Vec<String>>,
}

impl StubPublisher {
    /// Create a stub that accepts every post
    pub fn new() -> Self {
        Self {
            fail: false,
            published: Mutex::new(vec![]),
        }
    }

    /// Create a stub that rejects every post
    pub fn failing() -> Self {
        Self {
            fail: true,
            published: Mutex::new(vec![]),
        }
    }

    /// Get all texts that were published
    pub fn get_published(&self) -> Vec<String> {
        self.published
            .lock()
            .map(|published| published.clone())
            .unwrap_or_default()
    }
}

impl Default for StubPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Publisher for StubPublisher {
    async fn publish(&self, text: &str) -> Result<PublishResult, PublishError> {
        if self.fail {
            return Err(PublishError::Api("Stub publisher configured to fail".to_string()));
        }

        let mut published = self
            .published
            .lock()
            .map_err(|e| PublishError::Api(e.to_string()))?;
        published.push(text.to_string());
        let id = format!("stub_{}", published.len());

        Ok(PublishResult {
            url: Some(format!("https://x.com/stub/status/{}", id)),
            id,
        })
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn platform(&self) -> &'static str {
        "stub"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_records_posts() {
        let publisher = StubPublisher::new();

        let first = publisher.publish("one").await.unwrap();
        let second = publisher.publish("two").await.unwrap();

        assert_eq!(first.id, "stub_1");
        assert_eq!(second.id, "stub_2");
        assert_eq!(publisher.get_published(), vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_failing_stub() {
        let publisher = StubPublisher::failing();

        assert!(publisher.publish("one").await.is_err());
        assert!(publisher.get_published().is_empty());
    }
}
