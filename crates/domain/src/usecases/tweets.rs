//! Tweet draft management: create, list, delete

use std::sync::Arc;

use crate::{
    model::{NewTweet, Tweet},
    ports::{StoreError, TweetStore},
};

/// Thin use case over the tweet store
#[derive(Clone)]
pub struct TweetService {
    store: Arc<dyn TweetStore>,
}

impl TweetService {
    pub fn new(store: Arc<dyn TweetStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, tweet: NewTweet) -> Result<Tweet, StoreError> {
        let created = self.store.create(tweet).await?;
        tracing::info!(
            tweet_id = %created.id,
            publish_time = %created.publish_time,
            "Created tweet draft"
        );
        Ok(created)
    }

    /// All drafts, newest `publish_time` first
    pub async fn list(&self) -> Result<Vec<Tweet>, StoreError> {
        let tweets = self.store.list_all().await?;
        tracing::debug!(count = tweets.len(), "Listed tweet drafts");
        Ok(tweets)
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.store.delete(id).await?;
        tracing::info!(tweet_id = %id, "Deleted tweet draft");
        Ok(())
    }
}
