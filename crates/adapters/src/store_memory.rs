//! In-memory tweet store for testing and offline mode

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use tweet_composer_domain::{NewTweet, StoreError, Tweet, TweetStore};
use uuid::Uuid;

struct Entry {
    tweet: Tweet,
    seq: u64,
}

#[derive(Default)]
struct Inner {
    tweets: HashMap<String, Entry>,
    next_seq: u64,
}

/// In-memory tweet store implementation
pub struct InMemoryTweetStore {
    inner: RwLock<Inner>,
}

impl InMemoryTweetStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }
}

impl Default for InMemoryTweetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TweetStore for InMemoryTweetStore {
    async fn create(&self, tweet: NewTweet) -> Result<Tweet, StoreError> {
        let tweet = tweet.with_id(Uuid::new_v4().to_string());
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Database(e.to_string()))?;
        inner.next_seq += 1;
        let seq = inner.next_seq;
        inner.tweets.insert(
            tweet.id.clone(),
            Entry {
                tweet: tweet.clone(),
                seq,
            },
        );
        Ok(tweet)
    }

    async fn list_all(&self) -> Result<Vec<Tweet>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Database(e.to_string()))?;
        let mut entries: Vec<&Entry> = inner.tweets.values().collect();
        // Newest publish_time first; later inserts win ties
        entries.sort_by(|a, b| {
            b.tweet
                .publish_time
                .cmp(&a.tweet.publish_time)
                .then(b.seq.cmp(&a.seq))
        });
        Ok(entries.into_iter().map(|e| e.tweet.clone()).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Tweet>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(inner.tweets.get(id).map(|e| e.tweet.clone()))
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Database(e.to_string()))?;
        inner.tweets.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[tokio::test]
    async fn test_create_and_get() {
        let store = InMemoryTweetStore::new();

        let created = store
            .create(NewTweet::new("hello", datetime!(2024-06-01 8:00 UTC)))
            .await
            .unwrap();
        let fetched = store.get(&created.id).await.unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = InMemoryTweetStore::new();
        for (content, time) in [
            ("middle", datetime!(2024-06-02 8:00 UTC)),
            ("oldest", datetime!(2024-06-01 8:00 UTC)),
            ("newest", datetime!(2024-06-03 8:00 UTC)),
        ] {
            store.create(NewTweet::new(content, time)).await.unwrap();
        }

        let contents: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.content)
            .collect();

        assert_eq!(contents, vec!["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn test_equal_times_list_latest_insert_first() {
        let store = InMemoryTweetStore::new();

        for content in ["first", "second", "third"] {
            store
                .create(NewTweet::new(content, datetime!(2024-06-01 9:00 UTC)))
                .await
                .unwrap();
        }
        // Same instant, different offset
        store
            .create(NewTweet::new("fourth", datetime!(2024-06-01 4:00 -05:00)))
            .await
            .unwrap();

        let contents: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.content)
            .collect();

        assert_eq!(contents, vec!["fourth", "third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryTweetStore::new();
        let created = store
            .create(NewTweet::new("bye", datetime!(2024-06-01 8:00 UTC)))
            .await
            .unwrap();

        store.delete(&created.id).await.unwrap();
        store.delete(&created.id).await.unwrap();
        store.delete("never-existed").await.unwrap();

        assert!(store.get(&created.id).await.unwrap().is_none());
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
