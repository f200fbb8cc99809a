// ABOUTME: Entry point for the postboard binary.
// ABOUTME: Loads configuration, initializes tracing, and serves the API and frontend page listeners.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use postboard_server::{AppState, PostboardConfig, create_api_router, create_web_router};
use postboard_store::JsonFileStore;

/// Command-line overrides; each falls back to its POSTBOARD_* environment variable.
#[derive(Debug, Parser)]
#[command(name = "postboard", version, about = "Blog post API and frontend page server")]
struct Cli {
    /// Path of the JSON file holding the posts.
    #[arg(long, value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// Address for the JSON API listener.
    #[arg(long, value_name = "ADDR")]
    api_bind: Option<SocketAddr>,

    /// Address for the frontend page listener.
    #[arg(long, value_name = "ADDR")]
    web_bind: Option<SocketAddr>,

    /// API base URL the frontend page should call.
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "postboard=debug,tower_http=debug".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut config = PostboardConfig::from_env().context("invalid configuration")?;
    if let Some(path) = cli.data_file {
        config.data_file = path;
    }
    if let Some(addr) = cli.api_bind {
        config.api_bind = addr;
    }
    if let Some(addr) = cli.web_bind {
        config.web_bind = addr;
    }
    if cli.api_url.is_some() {
        config.api_url = cli.api_url;
    }

    tracing::info!(data_file = %config.data_file.display(), "postboard starting up");

    let store = Arc::new(JsonFileStore::new(config.data_file.clone()));
    let state = Arc::new(AppState::new(store, config.api_base_url()));

    let api_listener = tokio::net::TcpListener::bind(config.api_bind)
        .await
        .with_context(|| format!("failed to bind API listener on {}", config.api_bind))?;
    let web_listener = tokio::net::TcpListener::bind(config.web_bind)
        .await
        .with_context(|| format!("failed to bind page listener on {}", config.web_bind))?;

    tracing::info!("API listening on {}", config.api_bind);
    tracing::info!(api_base_url = %state.api_base_url, "page listening on {}", config.web_bind);

    let api = axum::serve(api_listener, create_api_router(Arc::clone(&state)))
        .with_graceful_shutdown(shutdown_signal());
    let web = axum::serve(web_listener, create_web_router(state))
        .with_graceful_shutdown(shutdown_signal());

    tokio::try_join!(async { api.await }, async { web.await })?;

    tracing::info!("postboard shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
