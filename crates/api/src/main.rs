use std::sync::Arc;

use anyhow::Context;
use fulfilment_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    fulfilment_observability::init(&config.observability);

    let services = fulfilment_api::app::services::build_services(&config).context("failed to build services")?;
    let app = fulfilment_api::app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
