use std::sync::Arc;

use docsink_api::{setup, state::AppState, telemetry};
use docsink_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    telemetry::init_tracing();

    // Load configuration
    let config = Config::from_env()?;

    let state = Arc::new(AppState::new(config.clone()));
    let app = setup::routes::setup_routes(state);

    // Start the server
    setup::server::start_server(&config, app).await?;

    Ok(())
}
