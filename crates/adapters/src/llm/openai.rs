//! OpenAI Responses API adapter

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tweet_composer_domain::{OptimizeError, Optimizer};

use super::{LlmConfig, SYSTEM_INSTRUCTION, build_optimization_prompt};

/// OpenAI optimizer using the Responses API
pub struct OpenAiOptimizer {
    client: Client,
    api_key: SecretString,
    base_url: String,
    config: LlmConfig,
}

impl OpenAiOptimizer {
    pub fn new(api_key: SecretString, config: LlmConfig) -> Result<Self, OptimizeError> {
        Self::with_base_url(api_key, "https://api.openai.com/v1".to_string(), config)
    }

    pub fn with_base_url(
        api_key: SecretString,
        base_url: String,
        config: LlmConfig,
    ) -> Result<Self, OptimizeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OptimizeError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url,
            config,
        })
    }

    async fn call_api(&self, prompt: &str) -> Result<String, OptimizeError> {
        let request = OpenAiRequest {
            model: self.config.model.clone(),
            input: prompt.to_string(),
            instructions: Some(SYSTEM_INSTRUCTION.to_string()),
            temperature: Some(self.config.temperature),
            max_output_tokens: Some(self.config.max_output_tokens),
        };

        let url = format!("{}/responses", self.base_url);

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OptimizeError::Timeout
                } else {
                    OptimizeError::Api(e.to_string())
                }
            })?;

        if response.status() == 429 {
            return Err(OptimizeError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OptimizeError::Api(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let api_response: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| OptimizeError::InvalidFormat(e.to_string()))?;

        let text = api_response
            .output
            .into_iter()
            .filter(|item| item.r#type == "message")
            .flat_map(|item| item.content)
            .filter(|c| c.r#type == "output_text")
            .map(|c| c.text)
            .collect::<Vec<_>>()
            .join("");

        let text = text.trim();
        if text.is_empty() {
            return Err(OptimizeError::InvalidFormat("Empty response".to_string()));
        }

        Ok(text.to_string())
    }
}

#[derive(Serialize)]
struct OpenAiRequest {
    model: String,
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    r#type: String,
    #[serde(default)]
    content: Vec<ContentItem>,
}

#[derive(Deserialize)]
struct ContentItem {
    r#type: String,
    #[serde(default)]
    text: String,
}

#[async_trait]
impl Optimizer for OpenAiOptimizer {
    async fn optimize(&self, text: &str) -> Result<String, OptimizeError> {
        let prompt = build_optimization_prompt(text);
        self.call_api(&prompt).await
    }

    fn provider(&self) -> &'static str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn optimizer(base_url: String) -> OpenAiOptimizer {
        OpenAiOptimizer::with_base_url(
            SecretString::new("test-key".into()),
            base_url,
            LlmConfig {
                model: "gpt-test".to_string(),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_optimize_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/responses"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({ "model": "gpt-test" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "output": [
                    { "type": "reasoning", "content": [] },
                    {
                        "type": "message",
                        "content": [
                            { "type": "output_text", "text": "Ship it. 🚀" }
                        ]
                    }
                ]
            })))
            .mount(&mock_server)
            .await;

        let result = optimizer(mock_server.uri()).optimize("ship").await.unwrap();

        assert_eq!(result, "Ship it. 🚀");
    }

    #[tokio::test]
    async fn test_optimize_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/responses"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
            .mount(&mock_server)
            .await;

        let result = optimizer(mock_server.uri()).optimize("ship").await;

        assert!(matches!(result, Err(OptimizeError::Api(_))));
    }
}
