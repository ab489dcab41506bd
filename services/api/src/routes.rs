use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use relo_ai::workflows::destinations::{
    destination_router, CountryCatalog, DestinationService,
};

pub(crate) fn with_destination_routes<C>(service: Arc<DestinationService<C>>) -> axum::Router
where
    C: CountryCatalog + 'static,
{
    destination_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::build_destination_service;
    use relo_ai::config::RecommendationConfig;
    use tower::ServiceExt;

    fn recommendation_config() -> RecommendationConfig {
        RecommendationConfig {
            default_top_k: 5,
            catalog_ttl_minutes: 60,
        }
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(payload) = healthcheck().await;
        assert_eq!(payload.get("status"), Some(&json!("ok")));
    }

    #[tokio::test]
    async fn recommendation_route_is_mounted() {
        let service =
            Arc::new(build_destination_service(&recommendation_config()).expect("service builds"));
        let router = with_destination_routes(service);

        let body = json!({
            "profile": {
                "language": "Korean",
                "job_field": { "code": "2", "name_ko": "전문가", "name_en": "Professionals" },
                "quality_of_life_weights": {
                    "income": 20.0,
                    "jobs": 20.0,
                    "health": 20.0,
                    "life_satisfaction": 20.0,
                    "safety": 20.0
                }
            },
            "weights": { "language": 50, "job": 20, "quality_of_life": 30 }
        });

        let response = router
            .oneshot(
                axum::http::Request::post("/api/v1/destinations/recommendations")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
    }
}
