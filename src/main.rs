use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use citel_core::config::{data_dir_from_env_value, reference_date_from_env_value};
use citel_core::{CandidateService, CoreConfig, DEFAULT_REST_ADDR};

/// Main entry point for the Citel candidate service
///
/// Resolves configuration once, builds the candidate service and serves the REST API.
///
/// # Environment Variables
/// - `CITEL_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `CANDIDATE_DATA_DIR`: Directory holding `candidates.json` (unset keeps candidates in memory)
/// - `CITEL_REFERENCE_DATE`: Fixed "today" for age computation, as dd/MM/yyyy (unset uses the
///   local date)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration is invalid or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("citel=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("CITEL_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let data_dir = data_dir_from_env_value(std::env::var("CANDIDATE_DATA_DIR").ok());
    let reference_date =
        reference_date_from_env_value(std::env::var("CITEL_REFERENCE_DATE").ok())?;

    let cfg = Arc::new(CoreConfig::new(data_dir, reference_date)?);
    let candidate_service = CandidateService::from_config(cfg)?;

    tracing::info!("++ Starting Citel REST on {}", rest_addr);
    api_rest::serve(&rest_addr, candidate_service).await?;

    Ok(())
}
