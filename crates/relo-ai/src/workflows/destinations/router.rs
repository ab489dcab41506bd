use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::catalog::CountryCatalog;
use super::service::{DestinationService, DestinationServiceError, RecommendationRequest};

/// Router builder exposing the recommendation endpoint.
pub fn destination_router<C>(service: Arc<DestinationService<C>>) -> Router
where
    C: CountryCatalog + 'static,
{
    Router::new()
        .route(
            "/api/v1/destinations/recommendations",
            post(recommend_handler::<C>),
        )
        .with_state(service)
}

pub(crate) async fn recommend_handler<C>(
    State(service): State<Arc<DestinationService<C>>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response
where
    C: CountryCatalog + 'static,
{
    match service.recommend(&request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(DestinationServiceError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(DestinationServiceError::Catalog(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
