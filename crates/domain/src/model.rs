//! Domain models and value objects

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A stored tweet draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    /// Store-assigned identifier
    pub id: String,
    /// Tweet body
    pub content: String,
    /// Intended publish/display time, used as the listing sort key
    #[serde(with = "time::serde::rfc3339")]
    pub publish_time: OffsetDateTime,
}

/// A tweet draft before the store has assigned it an ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTweet {
    pub content: String,
    /// RFC 3339 on output; any ISO 8601 date-time on input, UTC when no offset is given
    #[serde(with = "iso8601_lenient")]
    pub publish_time: OffsetDateTime,
}

impl NewTweet {
    pub fn new(content: impl Into<String>, publish_time: OffsetDateTime) -> Self {
        Self {
            content: content.into(),
            publish_time,
        }
    }

    /// Attach a store-assigned ID
    pub fn with_id(self, id: impl Into<String>) -> Tweet {
        Tweet {
            id: id.into(),
            content: self.content,
            publish_time: self.publish_time,
        }
    }
}

/// Request body for text optimization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub text: String,
}

/// Result of an optimization, echoing the original text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizedText {
    pub original_text: String,
    pub optimized_text: String,
}

/// Outcome of a publish attempt for a known tweet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Posted to the platform and removed from storage
    Published {
        post_id: String,
        url: Option<String>,
    },
    /// Posted to the platform, but removing the draft failed
    PublishedButRetained { post_id: String, error: String },
    /// Posting failed; the draft stays in storage
    Failed { error: String },
}

impl PublishOutcome {
    pub fn is_published(&self) -> bool {
        matches!(
            self,
            PublishOutcome::Published { .. } | PublishOutcome::PublishedButRetained { .. }
        )
    }
}

/// Accepts ISO 8601 timestamps with or without an offset
mod iso8601_lenient {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use time::format_description::well_known::{Iso8601, Rfc3339};
    use time::macros::format_description;
    use time::{OffsetDateTime, PrimitiveDateTime};

    pub fn serialize<S: Serializer>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time::serde::rfc3339::serialize(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OffsetDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(raw.trim()).map_err(D::Error::custom)
    }

    pub(super) fn parse(raw: &str) -> Result<OffsetDateTime, String> {
        if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
            return Ok(parsed);
        }
        if let Ok(parsed) = OffsetDateTime::parse(raw, &Iso8601::DEFAULT) {
            return Ok(parsed);
        }
        if let Ok(parsed) = PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT) {
            return Ok(parsed.assume_utc());
        }

        // `<input type="datetime-local">` omits seconds
        PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]"))
            .map(PrimitiveDateTime::assume_utc)
            .map_err(|_| format!("invalid ISO 8601 timestamp: {}", raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_tweet_serializes_rfc3339() {
        let tweet = NewTweet::new("hello", datetime!(2024-05-01 12:30:00 UTC)).with_id("abc");
        let json = serde_json::to_value(&tweet).unwrap();

        assert_eq!(json["id"], "abc");
        assert_eq!(json["content"], "hello");
        assert_eq!(json["publish_time"], "2024-05-01T12:30:00Z");
    }

    #[test]
    fn test_new_tweet_parses_offset_timestamp() {
        let json = r#"{"content": "hi", "publish_time": "2024-05-01T14:30:00+02:00"}"#;
        let tweet: NewTweet = serde_json::from_str(json).unwrap();

        assert_eq!(tweet.publish_time, datetime!(2024-05-01 12:30:00 UTC));
    }

    #[test]
    fn test_new_tweet_without_offset_is_utc() {
        let json = r#"{"content": "hi", "publish_time": "2024-05-01T12:00:00"}"#;
        let tweet: NewTweet = serde_json::from_str(json).unwrap();

        assert_eq!(tweet.publish_time, datetime!(2024-05-01 12:00:00 UTC));
    }

    #[test]
    fn test_new_tweet_accepts_fractional_and_minute_precision() {
        assert_eq!(
            iso8601_lenient::parse("2024-05-01T12:00:00.250").unwrap(),
            datetime!(2024-05-01 12:00:00.25 UTC)
        );
        assert_eq!(
            iso8601_lenient::parse("2024-05-01T12:00").unwrap(),
            datetime!(2024-05-01 12:00 UTC)
        );
    }

    #[test]
    fn test_new_tweet_rejects_garbage_time() {
        let json = r#"{"content": "hi", "publish_time": "tomorrow"}"#;
        assert!(serde_json::from_str::<NewTweet>(json).is_err());
    }

    #[test]
    fn test_new_tweet_requires_publish_time() {
        let json = r#"{"content": "hi"}"#;
        assert!(serde_json::from_str::<NewTweet>(json).is_err());
    }
}
