use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::destinations::catalog::StaticCountryCatalog;
use crate::workflows::destinations::router::recommend_handler;
use crate::workflows::destinations::service::{DestinationService, RecommendationRequest};

fn request_body(weights: (u32, u32, u32)) -> RecommendationRequest {
    RecommendationRequest {
        profile: profile("Korean", "2"),
        weights: super::common::weights(weights.0, weights.1, weights.2),
        top_k: Some(3),
    }
}

#[tokio::test]
async fn recommend_handler_returns_the_ranked_report() {
    let service = Arc::new(seed_service());

    let response = recommend_handler::<StaticCountryCatalog>(
        State(service),
        axum::Json(request_body((50, 20, 30))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let recommendations = payload
        .get("recommendations")
        .and_then(serde_json::Value::as_array)
        .expect("recommendations present");
    assert_eq!(recommendations.len(), 3);
    assert_eq!(
        recommendations[0].get("rank").and_then(serde_json::Value::as_u64),
        Some(1)
    );
    assert_eq!(
        payload
            .get("applied_weights")
            .and_then(|weights| weights.get("language"))
            .and_then(serde_json::Value::as_f64),
        Some(0.5)
    );
}

#[tokio::test]
async fn recommend_handler_rejects_invalid_weights() {
    let service = Arc::new(seed_service());

    let response = recommend_handler::<StaticCountryCatalog>(
        State(service),
        axum::Json(request_body((33, 33, 34))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("multiples of 10"));
}

#[tokio::test]
async fn recommend_handler_maps_catalog_failures_to_bad_gateway() {
    let service =
        Arc::new(DestinationService::new(Arc::new(UnavailableCatalog)).expect("service builds"));

    let response = recommend_handler::<UnavailableCatalog>(
        State(service),
        axum::Json(request_body((30, 30, 40))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn recommendation_route_accepts_payloads() {
    let router = seed_router();

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/destinations/recommendations")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&request_body((30, 30, 40))).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload.get("recommendations").is_some());
}

#[tokio::test]
async fn recommendation_route_accepts_omitted_weights() {
    let router = seed_router();

    // No weights key at all: the default split must apply and be visible.
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
        }
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/destinations/recommendations")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload
            .get("applied_weights")
            .and_then(|weights| weights.get("quality_of_life"))
            .and_then(serde_json::Value::as_f64),
        Some(0.4)
    );
}
