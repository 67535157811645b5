//! Standalone REST API server binary.
//!
//! Serves only the REST API (with OpenAPI/Swagger UI), without the workspace's
//! `medrec-run` composition root. Useful when developing the handlers.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use medrec_core::{seed, CoreConfig};

/// Main entry point for the standalone REST API server.
///
/// # Environment Variables
/// - `MEDREC_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `MEDREC_SEED_DEMO_DATA`: load demo patients and encounters at startup (default: false)
///
/// # Errors
/// Returns an error if the configuration is invalid, the demo records cannot be
/// loaded, the address cannot be bound, or the server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("medrec_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CoreConfig::from_env_values(
        std::env::var("MEDREC_REST_ADDR").ok(),
        std::env::var("MEDREC_SEED_DEMO_DATA").ok(),
    )?;

    let (patients, encounters) = seed::in_memory_repositories(cfg.seed_demo_data())?;
    let app = api_rest::router(AppState::new(Arc::new(patients), Arc::new(encounters)));

    tracing::info!("-- Starting MedRec REST API on {}", cfg.rest_addr());

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
