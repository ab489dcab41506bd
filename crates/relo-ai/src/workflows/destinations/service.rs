use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::{CatalogError, CountryCatalog};
use super::domain::{RecommendationReport, UserProfile, ValidationError, Weights};
use super::engine::{RecommendationEngine, DEFAULT_TOP_K};
use super::indicators::IndicatorError;

/// One scoring request as received from the HTTP layer or the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub profile: UserProfile,
    #[serde(default)]
    pub weights: Weights,
    #[serde(default)]
    pub top_k: Option<usize>,
}

/// Service facade composing the country catalog, the indicator store, and
/// the ranking engine. Weights travel through every call explicitly; the
/// service holds no per-request state.
pub struct DestinationService<C> {
    catalog: Arc<C>,
    engine: RecommendationEngine,
    default_top_k: usize,
}

impl<C> DestinationService<C>
where
    C: CountryCatalog + 'static,
{
    pub fn new(catalog: Arc<C>) -> Result<Self, IndicatorError> {
        Self::with_default_top_k(catalog, DEFAULT_TOP_K)
    }

    pub fn with_default_top_k(
        catalog: Arc<C>,
        default_top_k: usize,
    ) -> Result<Self, IndicatorError> {
        Ok(Self {
            catalog,
            engine: RecommendationEngine::new()?,
            default_top_k,
        })
    }

    /// Validate the request, resolve the catalog, and rank.
    ///
    /// Validation failures reject the request before any scoring; an empty
    /// catalog produces an empty (valid) report.
    pub fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationReport, DestinationServiceError> {
        request.profile.validate()?;
        request.weights.validate()?;

        let countries = self.catalog.fetch_all()?;
        let top_k = request.top_k.unwrap_or(self.default_top_k);
        let report = self
            .engine
            .rank(&request.profile, request.weights, &countries, top_k);

        info!(
            candidates = report.total_candidates,
            returned = report.recommendations.len(),
            "destination ranking computed"
        );

        Ok(report)
    }

    pub const fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }
}

/// Error raised by the destination recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum DestinationServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Indicators(#[from] IndicatorError),
}
