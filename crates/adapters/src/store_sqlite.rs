//! SQLite tweet store implementation

use async_trait::async_trait;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::path::Path;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tweet_composer_domain::{NewTweet, StoreError, Tweet, TweetStore};
use uuid::Uuid;

/// SQLite-backed tweet store
pub struct SqliteTweetStore {
    pool: SqlitePool,
}

impl SqliteTweetStore {
    /// Create a new SQLite tweet store, initializing the database if needed
    pub async fn new(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db_path = db_path.as_ref();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Database(format!("Failed to create directory: {}", e))
                })?;
            }
        }

        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    /// Create an in-memory SQLite store (for testing)
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    async fn run_migrations(&self) -> Result<(), StoreError> {
        // publish_secs/publish_nanos hold the UTC instant so ordering ignores the stored offset
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tweets (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                content TEXT NOT NULL,
                publish_time TEXT NOT NULL,
                publish_secs INTEGER NOT NULL,
                publish_nanos INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_tweets_publish_time
            ON tweets(publish_secs DESC, publish_nanos DESC, seq DESC)
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }
}

fn row_to_tweet((id, content, publish_time): (String, String, String)) -> Result<Tweet, StoreError> {
    let publish_time = OffsetDateTime::parse(&publish_time, &Rfc3339)
        .map_err(|e| StoreError::Serialization(e.to_string()))?;

    Ok(Tweet {
        id,
        content,
        publish_time,
    })
}

#[async_trait]
impl TweetStore for SqliteTweetStore {
    async fn create(&self, tweet: NewTweet) -> Result<Tweet, StoreError> {
        let tweet = tweet.with_id(Uuid::new_v4().to_string());

        let publish_time_str = tweet
            .publish_time
            .format(&Rfc3339)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let publish_secs = tweet.publish_time.unix_timestamp();
        let publish_nanos = i64::from(tweet.publish_time.nanosecond());

        sqlx::query(
            "INSERT INTO tweets (id, content, publish_time, publish_secs, publish_nanos) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&tweet.id)
        .bind(&tweet.content)
        .bind(&publish_time_str)
        .bind(publish_secs)
        .bind(publish_nanos)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(tweet)
    }

    async fn list_all(&self) -> Result<Vec<Tweet>, StoreError> {
        let rows: Vec<(String, String, String)> = sqlx::query_as(
            "SELECT id, content, publish_time FROM tweets ORDER BY publish_secs DESC, publish_nanos DESC, seq DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        rows.into_iter().map(row_to_tweet).collect()
    }

    async fn get(&self, id: &str) -> Result<Option<Tweet>, StoreError> {
        let row: Option<(String, String, String)> =
            sqlx::query_as("SELECT id, content, publish_time FROM tweets WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| StoreError::Database(e.to_string()))?;

        row.map(row_to_tweet).transpose()
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM tweets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            tracing::debug!(tweet_id = %id, "Delete of unknown tweet ignored");
        }

        Ok(())
    }
}
