use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use tonal_classifier::LazyDistilBert;
use tonal_storage::SentimentStore;
use tonal_web::config::{LogFormat, WebConfig};
use tonal_web::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = WebConfig::from_env()?;
    init_tracing(config.log_format);

    let store = SentimentStore::new(&config.db_path);
    store.initialize().await?;

    // Warm the model up front. If it cannot load, the pages that do not
    // classify still serve and submissions fail until it does.
    let classifier = Arc::new(LazyDistilBert::new(&config.model_dir));
    let warm = Arc::clone(&classifier);
    match tokio::task::spawn_blocking(move || warm.ensure_loaded().map(|_| ())).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!(
            error = %e,
            "sentiment model unavailable; submissions will fail until it loads"
        ),
        Err(e) => tracing::warn!(error = %e, "sentiment model warm-up task failed"),
    }

    let state = AppState::new(store, classifier)?;
    let app = tonal_web::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| eyre::eyre!("failed to bind to {}: {e}", config.bind))?;
    tracing::info!(addr = %config.bind, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
