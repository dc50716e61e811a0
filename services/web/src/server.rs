use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_site_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use shiftcare::config::AppConfig;
use shiftcare::error::AppError;
use shiftcare::signup::HttpRelayClient;
use shiftcare::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.listings.take() {
        config.catalog.listings_path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(load_catalog(config.catalog.listings_path.as_deref())?);
    let relay = Arc::new(HttpRelayClient::new(config.relay.endpoint.clone()));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_site_routes(catalog, relay)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        relay = %config.relay.endpoint,
        "shiftcare pre-launch site ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
