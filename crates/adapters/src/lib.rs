//! tweet-composer adapters crate
//!
//! This crate contains infrastructure adapters implementing the domain ports:
//! - `store`: SQLite and in-memory tweet stores
//! - `llm`: LLM provider adapters (Gemini, OpenAI, stub)
//! - `x`: X (Twitter) API publishing adapters

mod store_memory;
mod store_sqlite;

pub mod llm;
pub mod x_api;

/// Re-exports for tweet store adapters
pub mod store {
    pub use crate::store_memory::InMemoryTweetStore;
    pub use crate::store_sqlite::SqliteTweetStore;
}

/// Re-exports for X API adapters
pub mod x {
    pub use crate::x_api::{OAuthCredentials, StubPublisher, XPublisher};
}
