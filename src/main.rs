use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use climate_plate::catalog::IngredientCatalog;
use climate_plate::cli::Cli;
use climate_plate::error::Result;
use climate_plate::explain::ExplanationClient;
use climate_plate::http::{AppState, router};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();

    let catalog = IngredientCatalog::load(&cli.catalog)?;
    info!(path = %cli.catalog, count = catalog.len(), "catalog loaded");
    if catalog.is_empty() {
        warn!("catalog is empty, every add will be rejected");
    }

    let explainer = ExplanationClient::from_env();
    if explainer.is_some() {
        info!("explanation endpoint enabled");
    }

    let state = AppState::new(catalog, explainer);
    let app = router(state);

    let address = format!("{}:{}", cli.host, cli.port);
    let listener = TcpListener::bind(&address).await?;
    info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
