//! Binary entrypoint for the persona HTTP server.
//!
//! Configuration comes from environment variables; see
//! [`persona_server::config`].

use anyhow::Context;

use persona_server::config::ServerConfig;
use persona_server::router::build_router;
use persona_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    persona_server::logging::init();

    let config = ServerConfig::from_env().context("failed to read server configuration")?;
    let state = AppState::new(config.mode);
    let app = build_router(state);

    let addr = config.bind_addr();
    tracing::info!(mode = ?config.mode, "persona server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("API endpoints available at http://{}/api/assistants", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
