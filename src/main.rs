//! Gatehouse Server
//! Mission: Boot the authentication service and serve it over HTTP

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use gatehouse::auth::{AuthState, InMemoryUserStore, JwtHandler};
use gatehouse::config::AppConfig;
use gatehouse::routes::app_router;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gatehouse=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    info!("🚀 Starting gatehouse auth service...");

    let config = AppConfig::from_env();

    let user_store = Arc::new(InMemoryUserStore::demo());
    let jwt_handler = Arc::new(JwtHandler::new(config.jwt_secret.clone()));
    let state = AuthState::new(
        user_store,
        jwt_handler,
        Duration::minutes(config.access_token_ttl_minutes),
    );

    let app = app_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        "🔐 Access tokens live for {} minutes",
        config.access_token_ttl_minutes
    );
    info!("✅ Server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
