//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub publish: PublishConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_backend")]
    pub backend: String,

    #[serde(default = "default_sqlite_path")]
    pub sqlite_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub openai: OpenAiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_gemini_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    #[serde(default = "default_openai_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    #[serde(default = "default_publish_provider")]
    pub provider: String,

    #[serde(default)]
    pub x: XConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XConfig {
    #[serde(default = "default_x_base_url")]
    pub base_url: String,

    #[serde(default = "default_x_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_x_consumer_key_env")]
    pub consumer_key_env: String,

    #[serde(default = "default_x_consumer_secret_env")]
    pub consumer_secret_env: String,

    #[serde(default = "default_x_access_token_env")]
    pub access_token_env: String,

    #[serde(default = "default_x_access_token_secret_env")]
    pub access_token_secret_env: String,
}

// Default value functions
fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("./static")
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("./templates")
}

fn default_store_backend() -> String {
    "sqlite".to_string()
}

fn default_sqlite_path() -> PathBuf {
    PathBuf::from("./tweets.sqlite")
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_timeout() -> u64 {
    45
}

fn default_max_output_tokens() -> u32 {
    256
}

fn default_max_chars() -> usize {
    280
}

fn default_gemini_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_openai_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_publish_provider() -> String {
    "disabled".to_string()
}

fn default_x_base_url() -> String {
    "https://api.twitter.com".to_string()
}

fn default_x_timeout() -> u64 {
    30
}

fn default_x_consumer_key_env() -> String {
    "X_CONSUMER_KEY".to_string()
}

fn default_x_consumer_secret_env() -> String {
    "X_CONSUMER_SECRET".to_string()
}

fn default_x_access_token_env() -> String {
    "X_ACCESS_TOKEN".to_string()
}

fn default_x_access_token_secret_env() -> String {
    "X_ACCESS_TOKEN_SECRET".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            static_dir: default_static_dir(),
            templates_dir: default_templates_dir(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_store_backend(),
            sqlite_path: default_sqlite_path(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
            max_output_tokens: default_max_output_tokens(),
            max_chars: default_max_chars(),
            gemini: GeminiConfig::default(),
            openai: OpenAiConfig::default(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_gemini_api_key_env(),
            base_url: default_gemini_base_url(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_openai_api_key_env(),
            base_url: default_openai_base_url(),
        }
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            provider: default_publish_provider(),
            x: XConfig::default(),
        }
    }
}

impl Default for XConfig {
    fn default() -> Self {
        Self {
            base_url: default_x_base_url(),
            timeout_secs: default_x_timeout(),
            consumer_key_env: default_x_consumer_key_env(),
            consumer_secret_env: default_x_consumer_secret_env(),
            access_token_env: default_x_access_token_env(),
            access_token_secret_env: default_x_access_token_secret_env(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from("./config.toml");
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        } else if config_path.is_some() {
            // User specified a path that doesn't exist
            anyhow::bail!("Config file not found: {}", path.display());
        }

        // Add environment variable overrides
        builder = builder.add_source(
            config::Environment::with_prefix("TWEET_COMPOSER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> String {
        r#"# tweet-composer configuration
#
# Secrets are never stored here: each *_env key names the environment
# variable that holds the value.

[server]
bind_addr = "127.0.0.1:8000"
static_dir = "./static"
templates_dir = "./templates"

[store]
backend = "sqlite"  # sqlite, memory
sqlite_path = "./tweets.sqlite"

[llm]
provider = "gemini"  # gemini, openai, stub
model = "gemini-2.0-flash"
temperature = 0.7
timeout_secs = 45
max_output_tokens = 256
# Advisory only: longer output is logged, not rejected
max_chars = 280

[llm.gemini]
api_key_env = "GEMINI_API_KEY"
base_url = "https://generativelanguage.googleapis.com"

[llm.openai]
api_key_env = "OPENAI_API_KEY"
base_url = "https://api.openai.com/v1"

[publish]
provider = "disabled"  # x, stub, disabled

[publish.x]
base_url = "https://api.twitter.com"
timeout_secs = 30
consumer_key_env = "X_CONSUMER_KEY"
consumer_secret_env = "X_CONSUMER_SECRET"
access_token_env = "X_ACCESS_TOKEN"
access_token_secret_env = "X_ACCESS_TOKEN_SECRET"
"#
        .to_string()
    }
}
