use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use tradegate_api::app::services::AppServices;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tradegate_observability::init();

    let services = Arc::new(AppServices::with_cache_ttl(cache_ttl_from_env()));

    let seed = std::env::var("SEED_DEMO_DATA")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);
    if seed {
        let summary = services
            .seed_demo_data()
            .await
            .context("failed to load demo data")?;
        tracing::info!(
            partners = summary.partners,
            products = summary.products,
            consumers = summary.consumers,
            partner_id = %summary.demo_partner_id,
            "demo data loaded"
        );
    }

    let app = tradegate_api::app::build_app(services);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

fn cache_ttl_from_env() -> Option<Duration> {
    let raw = std::env::var("CACHE_TTL_SECS").ok()?;
    match raw.parse::<u64>() {
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(_) => {
            tracing::warn!("CACHE_TTL_SECS={raw} is not a number; caching without TTL");
            None
        }
    }
}
