use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use chrono::Duration;
use metrics_exporter_prometheus::PrometheusHandle;
use relo_ai::config::RecommendationConfig;
use relo_ai::workflows::destinations::{
    CachedCatalog, DestinationService, IndicatorError, StaticCountryCatalog,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Service wiring used by the server: the built-in catalog behind the
/// TTL-bounded read-through cache.
pub(crate) fn build_destination_service(
    config: &RecommendationConfig,
) -> Result<DestinationService<CachedCatalog<StaticCountryCatalog>>, IndicatorError> {
    let catalog = CachedCatalog::new(
        StaticCountryCatalog::seed(),
        Duration::minutes(config.catalog_ttl_minutes),
    );
    DestinationService::with_default_top_k(Arc::new(catalog), config.default_top_k)
}
