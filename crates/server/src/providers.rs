//! Build port implementations from configuration

use anyhow::{Context, Result, bail};
use secrecy::SecretString;
use std::sync::Arc;
use tweet_composer_adapters::{
    llm::{GeminiOptimizer, LlmConfig as AdapterLlmConfig, OpenAiOptimizer, StubOptimizer},
    store::{InMemoryTweetStore, SqliteTweetStore},
    x::{OAuthCredentials, StubPublisher, XPublisher},
};
use tweet_composer_domain::{Optimizer, Publisher, TweetStore};

use crate::config::{AppConfig, LlmConfig};

pub(crate) async fn build_store(config: &AppConfig) -> Result<Arc<dyn TweetStore>> {
    match config.store.backend.as_str() {
        "sqlite" => {
            let store = SqliteTweetStore::new(&config.store.sqlite_path)
                .await
                .with_context(|| {
                    format!(
                        "Failed to open SQLite store at {}",
                        config.store.sqlite_path.display()
                    )
                })?;
            Ok(Arc::new(store))
        }
        "memory" => {
            tracing::warn!("Using in-memory store; drafts are lost on restart");
            Ok(Arc::new(InMemoryTweetStore::new()))
        }
        other => bail!("Unknown store backend: {}", other),
    }
}

pub(crate) fn build_optimizer(config: &AppConfig) -> Result<Arc<dyn Optimizer>> {
    let llm_config = adapter_llm_config(&config.llm);

    match config.llm.provider.as_str() {
        "gemini" => {
            let api_key = load_secret(&config.llm.gemini.api_key_env, "gemini")?;
            let optimizer = GeminiOptimizer::with_base_url(
                api_key,
                config.llm.gemini.base_url.clone(),
                llm_config,
            )?;
            Ok(Arc::new(optimizer))
        }
        "openai" => {
            let api_key = load_secret(&config.llm.openai.api_key_env, "openai")?;
            let optimizer = OpenAiOptimizer::with_base_url(
                api_key,
                config.llm.openai.base_url.clone(),
                llm_config,
            )?;
            Ok(Arc::new(optimizer))
        }
        "stub" => Ok(Arc::new(StubOptimizer::echo())),
        other => bail!("Unknown LLM provider: {}", other),
    }
}

pub(crate) fn build_publisher(config: &AppConfig) -> Result<Arc<dyn Publisher>> {
    match config.publish.provider.as_str() {
        "x" => {
            let x = &config.publish.x;
            let credentials = OAuthCredentials {
                consumer_key: load_secret(&x.consumer_key_env, "x")?,
                consumer_secret: load_secret(&x.consumer_secret_env, "x")?,
                access_token: load_secret(&x.access_token_env, "x")?,
                access_token_secret: load_secret(&x.access_token_secret_env, "x")?,
            };
            let publisher =
                XPublisher::with_base_url(credentials, x.base_url.clone(), x.timeout_secs)?;
            Ok(Arc::new(publisher))
        }
        "stub" => Ok(Arc::new(StubPublisher::new())),
        "disabled" => {
            tracing::warn!("Publishing is disabled; publish requests will keep their drafts");
            Ok(Arc::new(XPublisher::disabled()))
        }
        other => bail!("Unknown publish provider: {}", other),
    }
}

fn adapter_llm_config(config: &LlmConfig) -> AdapterLlmConfig {
    AdapterLlmConfig {
        model: config.model.clone(),
        temperature: config.temperature,
        max_output_tokens: config.max_output_tokens,
        timeout_secs: config.timeout_secs,
    }
}

pub(crate) fn load_secret(env_var: &str, provider: &str) -> Result<SecretString> {
    if env_var.trim().is_empty() {
        bail!("No secret env var configured for provider {}", provider);
    }

    let value = std::env::var(env_var).with_context(|| {
        format!(
            "Missing secret env var {} for provider {}",
            env_var, provider
        )
    })?;

    if value.trim().is_empty() {
        bail!(
            "Secret env var {} is empty for provider {}",
            env_var,
            provider
        );
    }

    Ok(SecretString::new(value.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_secret_rejects_blank_env_name() {
        assert!(load_secret("  ", "test").is_err());
    }

    #[test]
    fn test_load_secret_missing_var() {
        let err = load_secret("TWEET_COMPOSER_TEST_SURELY_UNSET_VAR", "test").unwrap_err();
        assert!(err.to_string().contains("TWEET_COMPOSER_TEST_SURELY_UNSET_VAR"));
    }

    #[test]
    fn test_unknown_providers_fail() {
        let mut config = AppConfig::default();
        config.llm.provider = "carrier-pigeon".to_string();
        config.publish.provider = "fax".to_string();

        assert!(build_optimizer(&config).is_err());
        assert!(build_publisher(&config).is_err());
    }

    #[tokio::test]
    async fn test_offline_providers_build() {
        let mut config = AppConfig::default();
        config.store.backend = "memory".to_string();
        config.llm.provider = "stub".to_string();
        config.publish.provider = "stub".to_string();

        build_store(&config).await.unwrap();
        assert_eq!(build_optimizer(&config).unwrap().provider(), "stub");
        assert_eq!(build_publisher(&config).unwrap().platform(), "stub");
    }
}
