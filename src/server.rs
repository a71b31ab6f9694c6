use anyhow::Result;
use axum::{
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::{
    billing,
    config::{Config, CorsConfig},
    handlers::{self, AppState},
    metrics,
    pricing::{CostCalculator, PriceCache, StaticPriceResolver},
    signals::setup_signal_handlers,
};

/// Build the shared handler state: the price cache over the static tables,
/// the calculator on top of it, and the catalog HTTP client.
pub fn build_state(config: Config) -> Result<AppState> {
    let cache = Arc::new(PriceCache::new(
        Arc::new(StaticPriceResolver),
        Duration::from_secs(config.cache.ttl_seconds),
    ));
    let http_client = billing::build_client(&config.catalog)?;

    Ok(AppState::new(
        Arc::new(config),
        CostCalculator::new(cache),
        http_client,
    ))
}

/// Start the pricing server
///
/// This function:
/// 1. Initializes metrics (when enabled)
/// 2. Sets up signal handlers for graceful shutdown and cache reset
/// 3. Creates the Axum application
/// 4. Binds to the configured address
/// 5. Serves requests with graceful shutdown support
pub async fn start_server(config: Config) -> Result<()> {
    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(Arc::new(metrics::init_metrics()?))
    } else {
        None
    };

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    let state = build_state(config)?;

    let (shutdown_tx, signal_handle) = setup_signal_handlers(state.cache().clone())?;
    let mut shutdown_rx = shutdown_tx.subscribe();

    info!(
        "Configuration: cache TTL {}s, catalog API key {}, CORS origins {:?}",
        state.config.cache.ttl_seconds,
        if state.config.catalog.has_api_key() { "configured" } else { "not configured" },
        state.config.cors.allowed_origins
    );

    let app = create_router(state, metrics_handle);

    info!("Starting Cloud Price Calculator on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await;

    // Stop the signal task even when serving failed
    let _ = shutdown_tx.send(crate::signals::ShutdownSignal::Graceful);
    signal_handle.await?;
    served?;

    info!("Server stopped gracefully");
    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(state: AppState, metrics_handle: Option<Arc<PrometheusHandle>>) -> Router {
    let cors = cors_layer(&state.config.cors);
    let metrics_endpoint = state.config.metrics.endpoint.clone();

    let api_routes = Router::new()
        .route("/", get(handlers::catalog::root))
        .route("/health", get(handlers::health::health_check))
        .route("/providers", get(handlers::catalog::providers))
        .route("/instances/:provider", get(handlers::catalog::instances))
        .route("/regions/:provider", get(handlers::catalog::regions))
        .route("/calculate", post(handlers::pricing::calculate))
        .route("/compare", get(handlers::pricing::compare_prices))
        .route("/recommendations", get(handlers::pricing::recommendations))
        .route("/pricing-trends/:provider", get(handlers::pricing::pricing_trends))
        .route("/cache/status", get(handlers::cache::status))
        .route("/cache/clear", delete(handlers::cache::clear))
        .route("/catalog/services", get(handlers::billing::services))
        .route("/catalog/pricing/:service_id", get(handlers::billing::service_pricing))
        .route("/catalog/search", get(handlers::billing::search))
        .route("/catalog/estimate", post(handlers::billing::estimate))
        .with_state(state);

    let mut app = Router::new();
    if let Some(handle) = metrics_handle {
        app = app.merge(
            Router::new()
                .route(&metrics_endpoint, get(handlers::metrics_handler::metrics))
                .with_state(handle),
        );
    }

    app.merge(api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
