//! Serve command - run the HTTP server

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tokio::signal;
use tweet_composer_domain::policy::LengthPolicy;

use crate::args::ServeArgs;
use crate::config::AppConfig;
use crate::http::{AppState, DEFAULT_LANDING_PAGE, create_router};
use crate::providers::{build_optimizer, build_publisher, build_store};

pub async fn execute(args: ServeArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let bind_addr = args.bind.unwrap_or_else(|| config.server.bind_addr.clone());

    tracing::info!(
        bind_addr = %bind_addr,
        store = %config.store.backend,
        llm_provider = %config.llm.provider,
        publish_provider = %config.publish.provider,
        "Starting tweet-composer server"
    );

    // Build dependencies
    let store = build_store(&config).await?;
    let optimizer = build_optimizer(&config)?;
    let publisher = build_publisher(&config)?;

    let state = AppState::new(store, optimizer, publisher)
        .with_length_policy(LengthPolicy::new(config.llm.max_chars))
        .with_landing_page(load_landing_page(&config.server.templates_dir)?);

    let app = create_router(state, Some(&config.server.static_dir));

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    tracing::info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("tweet-composer server stopped");
    Ok(())
}

/// `templates/index.html` if present, otherwise the built-in page
fn load_landing_page(templates_dir: &Path) -> Result<String> {
    let path = templates_dir.join("index.html");
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "No landing page template, using built-in page");
        return Ok(DEFAULT_LANDING_PAGE.to_string());
    }

    tracing::info!(path = %path.display(), "Using landing page template");
    std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read template: {}", path.display()))
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Ctrl+C received, shutting down gracefully"),
        _ = terminate => tracing::info!("SIGTERM received, shutting down gracefully"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_page_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let page = load_landing_page(dir.path()).unwrap();
        assert_eq!(page, DEFAULT_LANDING_PAGE);
    }

    #[test]
    fn test_landing_page_uses_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<p>mine</p>").unwrap();

        let page = load_landing_page(dir.path()).unwrap();

        assert_eq!(page, "<p>mine</p>");
    }
}
