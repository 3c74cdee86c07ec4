//! Reporank web server.
//!
//! Run with: cargo run -p reporank-web

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use reporank_github::client::GithubClient;
use reporank_web::config::Config;
use reporank_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let client =
        GithubClient::with_base_url(config.github_api_url.clone(), config.github_token.clone())?;
    let state = AppState::new(Arc::new(client));

    let app = reporank_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server closed");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl+C received: closing HTTP server"),
        _ = terminate => info!("SIGTERM received: closing HTTP server"),
    }
}
