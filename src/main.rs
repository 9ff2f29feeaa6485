use prazos::bootstrap;
use prazos::config::Config;
use prazos::infrastructure::http::router::build_router;
use prazos::infrastructure::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    observability::init(&config)?;
    tracing::info!("Configuration loaded for {}", config.service_name);

    let state = bootstrap::build_app_state(&config)?;
    let app = build_router(state);

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
