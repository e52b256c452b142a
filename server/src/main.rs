#![recursion_limit = "256"]

mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal in deployed environments.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "invalid server configuration"))?;
    let app = routes::app().inspect_err(|e| tracing::error!(error = %e, "router setup failed"))?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "nora listening");
    axum::serve(listener, app).await?;
    Ok(())
}
