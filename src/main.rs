use std::net::SocketAddr;

use tracing::info;

use automation_backend::{api, config::Config, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "automation_backend=info,axum=info".into()),
        )
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    tokio::fs::create_dir_all(&config.data_dir).await?;

    info!(
        data_dir = %config.data_dir.display(),
        port = config.port,
        aiproxy_url = %config.aiproxy_url,
        "Initializing automation backend"
    );

    let port = config.port;
    let state = AppState::new(config)?;
    let app = api::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "Starting automation backend server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
