//! Widget REST server
//!
//! 启动时构造一次仓储并注入路由状态，随后监听 `WIDGET_HOST:WIDGET_PORT`。

use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use widget_domain::persist::InMemoryWidgetRepository;
use widget_server::{AppState, ServerConfig, router, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = ServerConfig::load().context("failed to load configuration")?;
    let state = AppState::new(Arc::new(InMemoryWidgetRepository::new()));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    info!(
        "Widget server listening on {}",
        listener.local_addr().context("listener has no local address")?
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
