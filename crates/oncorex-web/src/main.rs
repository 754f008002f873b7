//! Oncorex Web Server
//!
//! Run with: cargo run -p oncorex-web

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use oncorex_web::config::Config;
use oncorex_web::router::build_router;
use oncorex_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    let state = AppState::new(config);
    let app = build_router(state);

    info!("Server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
