//! Request handlers

use axum::{
    Json,
    extract::{FromRequest, Path, State},
    response::Html,
};
use serde::{Deserialize, Serialize};
use tweet_composer_domain::{
    NewTweet, OptimizeRequest, OptimizedText, PublishOutcome, Tweet,
    usecases::{OptimizeUseCase, PublishUseCase, TweetService},
};

use super::{AppState, error::ApiError};

/// JSON body extractor whose rejections use the `{detail}` error body
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub(super) struct ApiJson<T>(pub T);

/// Body of the delete and publish responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub(super) async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.landing_page.to_string())
}

pub(super) async fn health() -> &'static str {
    "OK"
}

pub(super) async fn create_tweet(
    State(state): State<AppState>,
    ApiJson(tweet): ApiJson<NewTweet>,
) -> Result<Json<Tweet>, ApiError> {
    let created = TweetService::new(state.store.clone()).create(tweet).await?;
    Ok(Json(created))
}

pub(super) async fn list_tweets(State(state): State<AppState>) -> Result<Json<Vec<Tweet>>, ApiError> {
    let tweets = TweetService::new(state.store.clone()).list().await?;
    Ok(Json(tweets))
}

pub(super) async fn delete_tweet(
    State(state): State<AppState>,
    Path(tweet_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    TweetService::new(state.store.clone())
        .delete(&tweet_id)
        .await?;
    Ok(Json(MessageResponse::new("Tweet deleted successfully")))
}

/// Responds 200 even when the platform rejected the post; the draft is kept
/// in that case and the failure only shows up in the logs.
pub(super) async fn publish_tweet(
    State(state): State<AppState>,
    Path(tweet_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let usecase = PublishUseCase::new(state.store.clone(), state.publisher.clone());

    match usecase.publish(&tweet_id).await? {
        PublishOutcome::Published { post_id, url } => {
            tracing::info!(tweet_id = %tweet_id, post_id = %post_id, url = ?url, "Publish request completed");
        }
        PublishOutcome::PublishedButRetained { post_id, .. } => {
            tracing::warn!(tweet_id = %tweet_id, post_id = %post_id, "Published but draft retained");
        }
        PublishOutcome::Failed { .. } => {
            tracing::warn!(tweet_id = %tweet_id, "Publish failed; reporting success to caller");
        }
    }

    Ok(Json(MessageResponse::new("Tweet published successfully")))
}

pub(super) async fn optimize(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<OptimizeRequest>,
) -> Result<Json<OptimizedText>, ApiError> {
    let usecase = OptimizeUseCase::new(state.optimizer.clone(), state.length_policy);
    let result = usecase.optimize(&request.text).await?;
    Ok(Json(result))
}
