use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use medrec_core::{seed, CoreConfig};

/// Main entry point for the MedRec application
///
/// Resolves configuration once, wires the repositories into the services and
/// serves the REST API.
///
/// # Environment Variables
/// - `MEDREC_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `MEDREC_SEED_DEMO_DATA`: load demo patients and encounters at startup (default: false)
/// - `RUST_LOG`: extra tracing directives
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration values are invalid,
/// - the demo records cannot be loaded,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medrec_run=info".parse()?)
                .add_directive("medrec_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CoreConfig::from_env_values(
        std::env::var("MEDREC_REST_ADDR").ok(),
        std::env::var("MEDREC_SEED_DEMO_DATA").ok(),
    )?;

    let (patients, encounters) = seed::in_memory_repositories(cfg.seed_demo_data())?;

    let state = AppState::new(Arc::new(patients), Arc::new(encounters));
    let app = api_rest::router(state);

    tracing::info!("++ Starting MedRec REST on {}", cfg.rest_addr());

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
