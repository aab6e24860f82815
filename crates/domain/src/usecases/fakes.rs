//! Fake port implementations shared by use case tests

use async_trait::async_trait;
use std::sync::Mutex;

use crate::model::{NewTweet, Tweet};
use crate::ports::{
    OptimizeError, Optimizer, PublishError, PublishResult, Publisher, StoreError, TweetStore,
};

#[derive(Default)]
pub struct FakeStore {
    pub tweets: Mutex<Vec<Tweet>>,
    pub fail_delete: bool,
    pub next_id: Mutex<u32>,
}

impl FakeStore {
    pub fn with_tweets(tweets: Vec<Tweet>) -> Self {
        Self {
            tweets: Mutex::new(tweets),
            ..Default::default()
        }
    }

    pub fn ids(&self) -> Vec<String> {
        self.tweets
            .lock()
            .unwrap()
            .iter()
            .map(|t| t.id.clone())
            .collect()
    }
}

#[async_trait]
impl TweetStore for FakeStore {
    async fn create(&self, tweet: NewTweet) -> Result<Tweet, StoreError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let tweet = tweet.with_id(format!("fake-{}", next_id));
        self.tweets.lock().unwrap().push(tweet.clone());
        Ok(tweet)
    }

    async fn list_all(&self) -> Result<Vec<Tweet>, StoreError> {
        let mut tweets = self.tweets.lock().unwrap().clone();
        tweets.sort_by(|a, b| b.publish_time.cmp(&a.publish_time));
        Ok(tweets)
    }

    async fn get(&self, id: &str) -> Result<Option<Tweet>, StoreError> {
        Ok(self
            .tweets
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        if self.fail_delete {
            return Err(StoreError::Database("delete failed".to_string()));
        }
        self.tweets.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }
}

pub struct FakePublisher {
    pub fail: bool,
    pub published: Mutex<Vec<String>>,
}

impl FakePublisher {
    pub fn ok() -> Self {
        Self {
            fail: false,
            published: Mutex::new(vec![]),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            published: Mutex::new(vec![]),
        }
    }
}

#[async_trait]
impl Publisher for FakePublisher {
    async fn publish(&self, text: &str) -> Result<PublishResult, PublishError> {
        if self.fail {
            return Err(PublishError::Api("service unavailable".to_string()));
        }
        self.published.lock().unwrap().push(text.to_string());
        Ok(PublishResult {
            id: "post_1".to_string(),
            url: None,
        })
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn platform(&self) -> &'static str {
        "fake"
    }
}

pub struct FakeOptimizer {
    pub response: Result<String, ()>,
}

#[async_trait]
impl Optimizer for FakeOptimizer {
    async fn optimize(&self, _text: &str) -> Result<String, OptimizeError> {
        self.response
            .clone()
            .map_err(|_| OptimizeError::Api("model unavailable".to_string()))
    }

    fn provider(&self) -> &'static str {
        "fake"
    }
}
