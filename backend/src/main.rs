//! Freelancer Marketplace API
//!
//! Matches service providers with skilled seekers.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! - Routes: HTTP request handling and routing
//! - Services: Validation, credentials and response shaping
//! - Repositories: Data access and search query construction
//! - Database: PostgreSQL with SQLx

use anyhow::Result;
use freelancer_api::{auth::PasswordScheme, config, db, routes, state::AppState};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = config::AppConfig::load()?;
    let production = config::AppConfig::is_production();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if production { "production" } else { "development" },
        password_scheme = ?config.auth.password_scheme,
        "Starting Freelancer API"
    );

    if production {
        check_deployable(&config)?;
    }

    let db_pool = db::create_pool(&config.database.url, config.database.max_connections)?;

    // Production schemas are managed explicitly through /api/init-db
    if !production {
        if let Err(e) = db::bootstrap_schema(&db_pool).await {
            warn!("Schema bootstrap failed: {:#}. Call /api/init-db once the database is reachable.", e);
        }
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = routes::create_router(AppState::new(db_pool, config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "freelancer_api=info,tower_http=info".into()
        } else {
            "freelancer_api=debug,tower_http=debug,sqlx=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Refuse to start in production with development settings
fn check_deployable(config: &config::AppConfig) -> Result<()> {
    if config.auth.password_scheme == PasswordScheme::Sha256 {
        warn!("New passwords are stored as unsalted SHA-256 digests; set auth.password_scheme = \"argon2\"");
    }

    let problems = config.production_problems();
    if problems.is_empty() {
        return Ok(());
    }

    for problem in &problems {
        error!("Configuration error: {}", problem);
    }
    anyhow::bail!("Invalid production configuration")
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
