//! Optimize use case: rewrite draft text through the configured LLM

use std::sync::Arc;

use crate::{
    model::OptimizedText,
    policy::LengthPolicy,
    ports::{OptimizeError, Optimizer},
};

pub struct OptimizeUseCase {
    optimizer: Arc<dyn Optimizer>,
    policy: LengthPolicy,
}

impl OptimizeUseCase {
    pub fn new(optimizer: Arc<dyn Optimizer>, policy: LengthPolicy) -> Self {
        Self { optimizer, policy }
    }

    /// Returns the model output unchanged. The length limit is only logged.
    pub async fn optimize(&self, text: &str) -> Result<OptimizedText, OptimizeError> {
        tracing::info!(
            provider = self.optimizer.provider(),
            text_length = text.len(),
            "Optimizing tweet text"
        );

        let optimized = self.optimizer.optimize(text).await?;

        if let Err(exceeded) = self.policy.check(&optimized) {
            tracing::warn!(
                provider = self.optimizer.provider(),
                len = exceeded.len,
                max = exceeded.max,
                "Optimized text exceeds platform limit"
            );
        }

        Ok(OptimizedText {
            original_text: text.to_string(),
            optimized_text: optimized,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::fakes::FakeOptimizer;

    #[tokio::test]
    async fn test_optimize_echoes_original() {
        let usecase = OptimizeUseCase::new(
            Arc::new(FakeOptimizer {
                response: Ok("Hello, world! 👋".to_string()),
            }),
            LengthPolicy::default(),
        );

        let result = usecase.optimize("hello").await.unwrap();

        assert_eq!(result.original_text, "hello");
        assert_eq!(result.optimized_text, "Hello, world! 👋");
    }

    #[tokio::test]
    async fn test_overlong_output_is_returned_unchanged() {
        let long = "x".repeat(400);
        let usecase = OptimizeUseCase::new(
            Arc::new(FakeOptimizer {
                response: Ok(long.clone()),
            }),
            LengthPolicy::default(),
        );

        let result = usecase.optimize("hello").await.unwrap();

        assert_eq!(result.optimized_text, long);
    }

    #[tokio::test]
    async fn test_optimizer_error_propagates() {
        let usecase = OptimizeUseCase::new(
            Arc::new(FakeOptimizer { response: Err(()) }),
            LengthPolicy::default(),
        );

        let result = usecase.optimize("hello").await;

        assert!(matches!(result, Err(OptimizeError::Api(_))));
    }
}
