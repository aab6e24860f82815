//! Advisory length constraints for tweet text
//!
//! Nothing here rejects content. Callers use the report to log when text
//! would not fit the platform.

/// Character limit of a standard post on X
pub const DEFAULT_MAX_CHARS: usize = 280;

/// Length policy configuration
#[derive(Debug, Clone, Copy)]
pub struct LengthPolicy {
    pub max_chars: usize,
}

impl Default for LengthPolicy {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

/// Advisory finding for a piece of text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("text is {len} characters, limit is {max}")]
pub struct LengthExceeded {
    pub len: usize,
    pub max: usize,
}

impl LengthPolicy {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Check text length in characters (not bytes)
    pub fn check(&self, text: &str) -> Result<(), LengthExceeded> {
        let len = char_count(text);
        if len > self.max_chars {
            return Err(LengthExceeded {
                len,
                max: self.max_chars,
            });
        }
        Ok(())
    }
}

/// Count Unicode scalar values
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
