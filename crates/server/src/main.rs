use anyhow::Context;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use server::{auth::TokenSigner, config::Settings, http::router::build_router, state::AppState};
use storage::Db;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let settings = Settings::new().context("Failed to load configuration")?;
    if settings.security.token_secret == "change_me_please" {
        tracing::warn!("Using the default token secret; set BLOG_SECURITY__TOKEN_SECRET");
    }

    let db = Db::new(&settings.database.url)
        .await
        .with_context(|| format!("Failed to open database: {}", settings.database.url))?;

    let state = AppState::new(db, TokenSigner::new(&settings.security.token_secret));
    let app = build_router(state, &settings.server.cors_origins);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to address: {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
