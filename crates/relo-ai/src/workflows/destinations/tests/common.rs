use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::destinations::catalog::{
    CatalogError, CountryCatalog, StaticCountryCatalog,
};
use crate::workflows::destinations::domain::{
    CountryRecord, JobField, QualityOfLifeWeights, UserProfile, Weights,
};
use crate::workflows::destinations::engine::RecommendationEngine;
use crate::workflows::destinations::router::destination_router;
use crate::workflows::destinations::service::DestinationService;

pub(super) fn profile(language: &str, job_code: &str) -> UserProfile {
    UserProfile {
        language: language.to_string(),
        job_field: JobField::from_code(job_code).expect("valid job-field code"),
        quality_of_life_weights: QualityOfLifeWeights::even_split(),
    }
}

pub(super) fn weights(language: u32, job: u32, quality_of_life: u32) -> Weights {
    Weights {
        language,
        job,
        quality_of_life,
    }
}

pub(super) fn country(name: &str, code: &str, languages: &[&str]) -> CountryRecord {
    CountryRecord {
        name: name.to_string(),
        code: code.to_string(),
        region: "Test".to_string(),
        languages: languages.iter().map(|language| language.to_string()).collect(),
        gdp_per_capita: None,
        employment_rate: None,
        occupation_employment: BTreeMap::new(),
        population: None,
    }
}

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::new().expect("indicator dataset loads")
}

pub(super) fn seed_service() -> DestinationService<StaticCountryCatalog> {
    DestinationService::new(Arc::new(StaticCountryCatalog::seed())).expect("service builds")
}

pub(super) fn seed_router() -> axum::Router {
    destination_router(Arc::new(seed_service()))
}

pub(super) struct UnavailableCatalog;

impl CountryCatalog for UnavailableCatalog {
    fn fetch_all(&self) -> Result<Vec<CountryRecord>, CatalogError> {
        Err(CatalogError::Unavailable("catalog offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
