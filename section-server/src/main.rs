use section_server::config::ServerConfig;
use section_server::service::SectionService;
use section_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if !config.xml_dir.is_dir() {
        tracing::warn!(
            dir = %config.xml_dir.display(),
            "data directory not found; every station will be reported as not found"
        );
    }

    let service = SectionService::from_dir(&config.xml_dir, &config.cache);
    let app = create_router(AppState::new(service));

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %config.bind_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(
        addr = %config.bind_addr,
        dir = %config.xml_dir.display(),
        ttl = ?config.cache.ttl,
        "section server listening"
    );
    tracing::info!("  GET /health");
    tracing::info!("  GET /station/{{ril100}}/train/{{trainNumber}}/waggon/{{number}}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        // Serve until killed
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
