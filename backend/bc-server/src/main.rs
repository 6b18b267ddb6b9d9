use bc_auth::{RateLimitConfig, TokenCodec};
use bc_config::Config;
use bc_server::{AppState, build_router, logger};

use std::error::Error;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

/// How often idle sign-in limiter keys are evicted
const LIMITER_CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration. A missing secret stops here.
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting bc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database pool + migrations
    let pool = bc_db::connect(&config.database_path()?).await?;

    // Token codec keyed from configuration
    let codec = TokenCodec::with_hs256(
        config.auth.secret_bytes()?,
        chrono::Duration::days(config.auth.token_ttl_days),
    );

    let rate_limit = RateLimitConfig {
        max_attempts: config.rate_limit.sign_in_attempts,
        window_secs: config.rate_limit.window_secs,
    };

    let state = AppState::new(
        pool,
        codec,
        rate_limit,
        config.handler.timeout(),
    );

    // Evict limiter keys whose window has passed
    let limiter = state.sign_in_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            limiter.retain_recent();
            log::debug!("Sign-in limiter tracking {} keys", limiter.len());
        }
    });

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
