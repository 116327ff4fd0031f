use crate::config::Settings;
use crate::logging::init_logging;
use crate::routes::router;
use std::sync::Arc;
use tracing::info;

mod config;
mod engine;
mod format;
mod logging;
mod position;
mod routes;
mod validation;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    init_logging(&settings.log_level)?;

    let port = settings.port;
    info!(
        "Candidate targets: {:?}",
        settings
            .candidate_targets
            .iter()
            .map(|t| t.average_cost)
            .collect::<Vec<_>>()
    );
    let app = router(Arc::new(settings));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
