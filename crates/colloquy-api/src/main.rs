use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use colloquy_api::{config::Config, routes, state::AppState};
use colloquy_persist::ThreadStore;
use colloquy_state::FilterStateBroadcaster;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    // Initialize logging
    init_logging(&config);

    tracing::info!("Starting Colloquy API server");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);

    // Thread store backed by the configured JSON file
    let store = ThreadStore::new(&config.storage.threads_file);
    tracing::info!("Thread store at {}", config.storage.threads_file);

    // The filter state broadcaster lives for the whole process; handlers and
    // the UI layer share this one instance.
    let filters = Arc::new(FilterStateBroadcaster::new());
    let _filter_log = filters.subscribe(|state| {
        tracing::debug!(
            filters = state.global_filters.len(),
            dashboards = state.selected_dashboards.len(),
            "filter state updated"
        );
    });

    // Create application state
    let state = Arc::new(AppState::new(config, store, filters));

    // Build router
    let app = routes::build_router(state.clone());

    // Start server
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}
