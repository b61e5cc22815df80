use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bird_hunt::config::GameConfig;
use bird_hunt::driver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    info!("Bird Hunt v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = GameConfig::load_or_default();
    config.validate()?;
    info!(
        "Configuration loaded: spawn_probability={}, max_total={}, max_age={}ms, seed={:?}",
        config.spawn.probability, config.spawn.max_total, config.max_age_ms, config.rng_seed
    );

    // Shutdown signal handler
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let summary = driver::run_round(&config, shutdown).await;

    info!(
        "Round finished: {:?}, score {}, {}s left, {} frames, {} spawned, {} hit, {} expired",
        summary.phase,
        summary.score,
        summary.time_left,
        summary.frames,
        summary.birds_spawned,
        summary.birds_hit,
        summary.birds_expired
    );

    Ok(())
}
