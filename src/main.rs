use anyhow::Context;
use products_api::{build_router, config, infrastructure};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config().context("failed to load configuration")?;
    infrastructure::logger::Logger::init(&config.logging);

    info!("Starting products API...");

    let repository = infrastructure::connect_repository(&config.database)
        .await
        .context("failed to initialize product storage")?;

    let app = build_router(&config, repository);

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("🚀 Products API running on http://{}", listener.local_addr()?);
    info!("   GET    /api/v1/products/health - Health check");
    info!("   GET    /api/v1/products        - List products");
    info!("   POST   /api/v1/products        - Create product");
    info!("   GET    /api/v1/products/:id    - Get product (X-API-Key required)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Products API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
