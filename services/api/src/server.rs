use crate::cli::ServeArgs;
use crate::infra::{build_destination_service, AppState};
use crate::routes::with_destination_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use relo_ai::config::AppConfig;
use relo_ai::error::AppError;
use relo_ai::telemetry;
use relo_ai::workflows::destinations::DestinationServiceError;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = build_destination_service(&config.recommendation)
        .map_err(DestinationServiceError::from)?;

    let app = with_destination_routes(Arc::new(service))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "destination recommender ready");

    axum::serve(listener, app).await?;
    Ok(())
}
