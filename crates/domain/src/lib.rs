//! tweet-composer domain crate
//!
//! This crate contains the core domain logic following hexagonal architecture:
//! - `model`: Tweet drafts and request/response values
//! - `ports`: Trait definitions for external dependencies (adapters)
//! - `usecases`: Application use cases / business logic
//! - `policy`: Advisory platform constraints

pub mod model;
pub mod policy;
pub mod ports;
pub mod usecases;

pub use model::*;
pub use ports::*;
