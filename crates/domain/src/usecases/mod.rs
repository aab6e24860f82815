//! Application use cases / business logic

pub mod optimize;
pub mod publish;
pub mod tweets;

#[cfg(test)]
pub(crate) mod fakes;

pub use optimize::OptimizeUseCase;
pub use publish::{PublishTweetError, PublishUseCase};
pub use tweets::TweetService;
