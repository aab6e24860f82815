//! Stub optimizer for testing and offline mode

use async_trait::async_trait;
use tweet_composer_domain::{OptimizeError, Optimizer};

/// Stub optimizer that returns configurable responses
pub struct StubOptimizer {
    response: Option<String>,
    error: Option<String>,
}

impl StubOptimizer {
    /// Create a stub that tidies the input text instead of calling a model
    pub fn echo() -> Self {
        Self {
            response: None,
            error: None,
        }
    }

    /// Create a stub that returns a specific response
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
            error: None,
        }
    }

    /// Create a stub that always fails with an API error
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            response: None,
            error: Some(message.into()),
        }
    }
}

impl Default for StubOptimizer {
    fn default() -> Self {
        Self::echo()
    }
}

#[async_trait]
impl Optimizer for StubOptimizer {
    async fn optimize(&self, text: &str) -> Result<String, OptimizeError> {
        if let Some(ref message) = self.error {
            return Err(OptimizeError::Api(message.clone()));
        }

        if let Some(ref response) = self.response {
            return Ok(response.clone());
        }

        // Echo mode: collapse whitespace and cut to the platform limit
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let trimmed: String = collapsed.chars().take(280).collect();
        if trimmed.is_empty() {
            return Ok("(empty draft)".to_string());
        }
        Ok(trimmed)
    }

    fn provider(&self) -> &'static str {
        "stub"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_collapses_whitespace() {
        let result = StubOptimizer::echo()
            .optimize("  hello \n  world  ")
            .await
            .unwrap();

        assert_eq!(result, "hello world");
    }

    #[tokio::test]
    async fn test_echo_truncates_to_limit() {
        let result = StubOptimizer::echo()
            .optimize(&"é".repeat(300))
            .await
            .unwrap();

        assert_eq!(result.chars().count(), 280);
    }

    #[tokio::test]
    async fn test_echo_never_empty() {
        let result = StubOptimizer::echo().optimize("   ").await.unwrap();
        assert!(!result.is_empty());
    }

    #[tokio::test]
    async fn test_configured_response() {
        let result = StubOptimizer::with_response("fixed")
            .optimize("anything")
            .await
            .unwrap();

        assert_eq!(result, "fixed");
    }

    #[tokio::test]
    async fn test_error_stub() {
        let result = StubOptimizer::with_error("down").optimize("anything").await;

        assert!(matches!(result, Err(OptimizeError::Api(msg)) if msg == "down"));
    }
}
