use clap::Parser;
use items_backend::api::build_app;
use items_backend::app_data::AppData;
use items_backend::cli::Cli;
use items_backend::config::{init_logging, BootstrapSettings};
use poem::{listener::TcpListener, Server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_logging()?;

    let settings = BootstrapSettings::from_env()?
        .with_overrides(cli.host, cli.port, cli.database_url)?;
    tracing::debug!("Loaded settings: {:?}", settings);

    let app_data = AppData::init(&settings).await;

    let server_url = format!("http://localhost:{}", settings.server_port());

    tracing::info!("Server is running on http://{}", settings.server_address());
    tracing::info!("Swagger UI available at {}/swagger", server_url);

    let app = build_app(app_data.item_store.clone(), server_url);

    let served = Server::new(TcpListener::bind(settings.server_address()))
        .run_with_graceful_shutdown(app, shutdown_signal(), Some(settings.shutdown_grace()))
        .await;

    if let Err(e) = app_data.shutdown().await {
        tracing::error!("Error closing database: {}", e);
    }

    served?;
    Ok(())
}

/// Resolves on Ctrl-C / SIGINT
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Unable to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
