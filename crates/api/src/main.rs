use std::sync::Arc;

use anyhow::Context;

use chainsight_api::app::{self, services::AppServices};
use chainsight_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    chainsight_observability::init(config.log_format);

    let services = AppServices::from_config(&config).context("failed to build services")?;
    let app = app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        seed_sample_data = config.seed_sample_data,
        "listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;
    Ok(())
}
