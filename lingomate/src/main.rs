use dotenvy::dotenv;
use lingomate::config::get_configuration;
use lingomate::services::metrics::init_metrics;
use lingomate::services::providers::gemini::GeminiTextProvider;
use lingomate::services::providers::TextProvider;
use lingomate::services::LingoAgent;
use lingomate::startup::build_router;
use lingomate::AppState;
use service_core::middleware::create_unkeyed_rate_limiter;
use service_core::observability::{init_tracing, shutdown_tracing};
use std::sync::Arc;
use tokio::signal;
use tracing::info;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "lingomate",
        &configuration.telemetry.log_level,
        configuration.telemetry.otlp_endpoint.as_deref(),
    );

    // The credential is mandatory: stop before the listener is bound.
    let gemini_config = configuration.gemini.provider_config().map_err(|e| {
        eprintln!("{}", e);
        tracing::error!(error = %e, "Missing Gemini credential");
        anyhow::anyhow!("{}", e)
    })?;

    init_metrics()?;

    let provider = GeminiTextProvider::new(gemini_config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize Gemini provider: {}", e))?;
    info!(model = %provider.model(), "Initialized Gemini text provider");
    let provider: Arc<dyn TextProvider> = Arc::new(provider);

    let agent = LingoAgent::new(provider, configuration.gemini.generation_params());
    let rate_limiter = create_unkeyed_rate_limiter(configuration.agent.requests_per_minute, 60);

    let app = build_router(AppState::new(agent, rate_limiter));

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting lingomate on {}", address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            anyhow::anyhow!("Server error: {}", e)
        })?;

    shutdown_tracing();
    Ok(())
}
