//! Google Gemini API adapter

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tweet_composer_domain::{OptimizeError, Optimizer};

use super::{LlmConfig, SYSTEM_INSTRUCTION, build_optimization_prompt};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini optimizer
pub struct GeminiOptimizer {
    client: Client,
    api_key: SecretString,
    base_url: String,
    config: LlmConfig,
}

impl GeminiOptimizer {
    pub fn new(api_key: SecretString, config: LlmConfig) -> Result<Self, OptimizeError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string(), config)
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
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(self.config.temperature),
                max_output_tokens: Some(self.config.max_output_tokens),
            }),
            system_instruction: Some(SystemInstruction {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            }),
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.config.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
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

        let api_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| OptimizeError::InvalidFormat(e.to_string()))?;

        let text = api_response
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(OptimizeError::InvalidFormat("Empty response".to_string()));
        }

        Ok(text.to_string())
    }
}

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "generationConfig")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "systemInstruction")]
    system_instruction: Option<SystemInstruction>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "maxOutputTokens")]
    max_output_tokens: Option<u32>,
}

#[derive(Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[async_trait]
impl Optimizer for GeminiOptimizer {
    async fn optimize(&self, text: &str) -> Result<String, OptimizeError> {
        let prompt = build_optimization_prompt(text);
        self.call_api(&prompt).await
    }

    fn provider(&self) -> &'static str {
        "gemini"
    }
}
