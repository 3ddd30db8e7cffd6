use ai_worker::{AppState, Config};
use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::WrapErr;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    info!(
        batch_size = config.batch.batch_size.get(),
        batch_delay_ms = config.batch.delay.as_millis() as u64,
        "Embedding pipeline configured"
    );

    let app = ai_worker::app(AppState::from_config(&config));

    create_app(app, &config.server)
        .await
        .wrap_err("Server error")?;

    info!("AI worker shutdown complete");
    Ok(())
}
