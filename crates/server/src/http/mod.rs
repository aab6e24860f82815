//! HTTP request router
//!
//! - `GET /` landing page
//! - `POST /api/tweets`, `GET /api/tweets` create and list drafts
//! - `DELETE /api/tweets/{tweet_id}` remove a draft
//! - `PUT /api/tweets/{tweet_id}/publish` post a draft and remove it
//! - `POST /api/optimize` rewrite text through the LLM
//! - `GET /health` liveness
//! - `/static/*` files from the configured static directory

mod error;
mod handlers;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tweet_composer_domain::{Optimizer, Publisher, TweetStore, policy::LengthPolicy};

/// Landing page served when no template override exists
pub const DEFAULT_LANDING_PAGE: &str = include_str!("../../assets/index.html");

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TweetStore>,
    pub optimizer: Arc<dyn Optimizer>,
    pub publisher: Arc<dyn Publisher>,
    pub length_policy: LengthPolicy,
    pub landing_page: Arc<str>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn TweetStore>,
        optimizer: Arc<dyn Optimizer>,
        publisher: Arc<dyn Publisher>,
    ) -> Self {
        Self {
            store,
            optimizer,
            publisher,
            length_policy: LengthPolicy::default(),
            landing_page: Arc::from(DEFAULT_LANDING_PAGE),
        }
    }

    pub fn with_length_policy(mut self, policy: LengthPolicy) -> Self {
        self.length_policy = policy;
        self
    }

    pub fn with_landing_page(mut self, html: impl Into<Arc<str>>) -> Self {
        self.landing_page = html.into();
        self
    }
}

/// Build the router. Static files are mounted only if `static_dir` exists.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route(
            "/api/tweets",
            post(handlers::create_tweet).get(handlers::list_tweets),
        )
        .route("/api/tweets/{tweet_id}", delete(handlers::delete_tweet))
        .route(
            "/api/tweets/{tweet_id}/publish",
            put(handlers::publish_tweet),
        )
        .route("/api/optimize", post(handlers::optimize));

    if let Some(dir) = static_dir.filter(|dir| dir.is_dir()) {
        tracing::info!(static_dir = %dir.display(), "Serving static files");
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
