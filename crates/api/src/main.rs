use anyhow::Context;

use ledgerline_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ledgerline_observability::init();

    let config = ApiConfig::from_env()?;
    if config.strict_lines {
        tracing::info!("strict journal line validation enabled");
    }

    let app = ledgerline_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
