//! Destination recommendation workflow: multi-criteria scoring and ranking
//! of candidate countries for a user profile.
//!
//! The pipeline runs entirely in memory: the catalog collaborator supplies
//! country records, the indicator store supplies the cached quality-of-life
//! table, the three criterion scorers produce per-country sub-scores, and
//! the engine combines them under explicit caller weights into a ranked,
//! explained report.

pub mod catalog;
pub mod domain;
pub(crate) mod engine;
pub mod indicators;
mod reasons;
pub mod router;
pub(crate) mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{CachedCatalog, CatalogError, CountryCatalog, StaticCountryCatalog};
pub use domain::{
    AppliedWeights, CountryRecord, CountrySummary, CriterionScores, JobField,
    QualityOfLifeWeights, Recommendation, RecommendationReport, ScoreBreakdown, ScoredCountry,
    UserProfile, ValidationError, Weights, SUPPORTED_LANGUAGES,
};
pub use engine::{RecommendationEngine, DEFAULT_TOP_K};
pub use indicators::{Indicator, IndicatorError, IndicatorSnapshot, IndicatorStore};
pub use router::destination_router;
pub use service::{DestinationService, DestinationServiceError, RecommendationRequest};
