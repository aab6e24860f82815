//! Port definitions (traits) for external dependencies
//!
//! These traits define the boundaries between the domain and external systems.
//! Adapters implement these traits to connect to real infrastructure.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{NewTweet, Tweet};

/// Error type for tweet store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Port for persisting tweet drafts
#[async_trait]
pub trait TweetStore: Send + Sync {
    /// Persist a new draft and return it with its assigned ID
    async fn create(&self, tweet: NewTweet) -> Result<Tweet, StoreError>;

    /// All stored drafts, newest `publish_time` first
    async fn list_all(&self) -> Result<Vec<Tweet>, StoreError>;

    /// Fetch a single draft
    async fn get(&self, id: &str) -> Result<Option<Tweet>, StoreError>;

    /// Remove a draft. Removing an unknown ID succeeds.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Error type for optimizer operations
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("LLM API error: {0}")]
    Api(String),
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Timeout")]
    Timeout,
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Port for LLM-based text rewriting
#[async_trait]
pub trait Optimizer: Send + Sync {
    /// Rewrite draft text for the platform, returning the model output
    async fn optimize(&self, text: &str) -> Result<String, OptimizeError>;

    /// Provider name (e.g., "gemini", "openai")
    fn provider(&self) -> &'static str;
}

/// Error type for publisher operations
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("API error: {0}")]
    Api(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result of a successful publish operation
#[derive(Debug, Clone)]
pub struct PublishResult {
    /// Platform-specific post ID
    pub id: String,
    /// URL to the published content, if available
    pub url: Option<String>,
}

/// Port for posting tweet text to a social platform
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish text, returns the platform post
    async fn publish(&self, text: &str) -> Result<PublishResult, PublishError>;

    /// Check if this publisher is enabled
    fn is_enabled(&self) -> bool;

    /// Get the platform name (e.g., "x")
    fn platform(&self) -> &'static str;
}
