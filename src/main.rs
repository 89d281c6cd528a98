use std::sync::Arc;

use factcheck_backend::config::AppConfig;
use factcheck_backend::routes::configure_routes;
use factcheck_backend::state::AppState;
use factcheck_backend::store::{init_schema, MessageStore};
use factcheck_backend::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // A missing .env file is fine; the environment may already be populated
    dotenvy::dotenv().ok();

    telemetry::init_tracing()?;

    let config = AppConfig::from_env()?;
    tracing::info!(
        store = %config.store.redacted_connection_string(),
        origins = ?config.server.allowed_origins,
        "configuration loaded"
    );

    let pool = config.store.build_pool()?;

    // The server must not accept traffic until the schema exists
    if let Err(e) = init_schema(&pool).await {
        tracing::error!(error = %e, "schema initialization failed");
        return Err(e.into());
    }

    let store = MessageStore::from_pool(pool);
    let state = AppState::new(Arc::new(store), &config);
    let routes = configure_routes(state, &config.server.allowed_origins);

    tracing::info!("Starting server on http://{}", config.server.bind_addr);
    warp::serve(routes).run(config.server.bind_addr).await;

    Ok(())
}
