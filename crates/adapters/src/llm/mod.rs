//! LLM provider adapters for tweet optimization

pub mod gemini;
pub mod openai;
pub mod stub;

pub use gemini::GeminiOptimizer;
pub use openai::OpenAiOptimizer;
pub use stub::StubOptimizer;

use serde::{Deserialize, Serialize};

/// Common LLM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model name/ID
    pub model: String,
    /// Temperature (0.0-1.0)
    pub temperature: f64,
    /// Maximum output tokens
    pub max_output_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            temperature: 0.7,
            max_output_tokens: 256,
            timeout_secs: 45,
        }
    }
}

/// System instruction sent alongside the prompt where the API supports one
pub(crate) const SYSTEM_INSTRUCTION: &str =
    "You are a social media copywriter. Reply with the rewritten tweet only.";

const OPTIMIZATION_GUIDELINES: &str = r#"Rewrite the following draft as a tweet. Follow these guidelines:
1. Be concise: cut filler words and keep one clear message.
2. Be engaging: open with a hook and use an active voice.
3. Stay relevant: keep the original meaning, facts, names and links.
4. Be unique: avoid cliches and generic phrasing.
5. Be grammatically correct: fix spelling, grammar and punctuation.
6. Keep it at or under 280 characters, including spaces, hashtags and emoji.

Return only the rewritten tweet text, without quotes or commentary.

Draft:
"#;

/// Build the optimization prompt: fixed guidelines followed by the user text
pub fn build_optimization_prompt(text: &str) -> String {
    let mut prompt = String::with_capacity(OPTIMIZATION_GUIDELINES.len() + text.len());
    prompt.push_str(OPTIMIZATION_GUIDELINES);
    prompt.push_str(text);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_ends_with_user_text() {
        let prompt = build_optimization_prompt("my draft about rust");
        assert!(prompt.ends_with("Draft:\nmy draft about rust"));
    }

    #[test]
    fn test_prompt_contains_guidelines() {
        let prompt = build_optimization_prompt("x");
        for needle in [
            "concise",
            "engaging",
            "relevant",
            "unique",
            "grammatically correct",
            "280 characters",
        ] {
            assert!(prompt.contains(needle), "missing guideline: {}", needle);
        }
    }
}
