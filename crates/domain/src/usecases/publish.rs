//! Publish use case: fetch the draft, post it, delete it on success
//!
//! A failed post is logged and reported as [`PublishOutcome::Failed`]; it is
//! not an error of this use case. The draft is only removed after the
//! platform accepted the post, so a failed post always leaves it in storage.
//! The sequence is not atomic: nothing guards against a concurrent delete
//! between the fetch and the post.

use std::sync::Arc;
use thiserror::Error;

use crate::{
    model::PublishOutcome,
    ports::{Publisher, StoreError, TweetStore},
};

/// Errors raised before any publish attempt is made
#[derive(Debug, Error)]
pub enum PublishTweetError {
    #[error("Tweet not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct PublishUseCase {
    store: Arc<dyn TweetStore>,
    publisher: Arc<dyn Publisher>,
}

impl PublishUseCase {
    pub fn new(store: Arc<dyn TweetStore>, publisher: Arc<dyn Publisher>) -> Self {
        Self { store, publisher }
    }

    pub async fn publish(&self, id: &str) -> Result<PublishOutcome, PublishTweetError> {
        let tweet = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| PublishTweetError::NotFound(id.to_string()))?;

        let result = match self.publisher.publish(&tweet.content).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(
                    tweet_id = %id,
                    platform = self.publisher.platform(),
                    error = %e,
                    "Publish failed, keeping draft"
                );
                return Ok(PublishOutcome::Failed {
                    error: e.to_string(),
                });
            }
        };

        tracing::info!(
            tweet_id = %id,
            platform = self.publisher.platform(),
            post_id = %result.id,
            "Published tweet"
        );

        if let Err(e) = self.store.delete(id).await {
            tracing::error!(
                tweet_id = %id,
                post_id = %result.id,
                error = %e,
                "Published tweet but failed to remove draft"
            );
            return Ok(PublishOutcome::PublishedButRetained {
                post_id: result.id,
                error: e.to_string(),
            });
        }

        Ok(PublishOutcome::Published {
            post_id: result.id,
            url: result.url,
        })
    }
}
