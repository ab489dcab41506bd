use tracing::debug;

use crate::workflows::destinations::domain::{CountryRecord, QualityOfLifeWeights};
use crate::workflows::destinations::indicators::{Indicator, IndicatorStore, NEUTRAL_SCORE};

/// Composite quality-of-life score: the weighted blend of the five
/// normalized sub-indicators under the user's sub-weights.
///
/// A country outside the indicator population scores the neutral default
/// rather than failing the ranking.
pub fn quality_of_life_score(
    weights: &QualityOfLifeWeights,
    country: &CountryRecord,
    store: &IndicatorStore,
) -> f64 {
    let snapshot = store
        .snapshot(&country.code)
        .or_else(|| store.snapshot(&country.name));
    let Some(snapshot) = snapshot else {
        debug!(country = %country.code, "no indicator coverage, using neutral quality-of-life score");
        return NEUTRAL_SCORE;
    };

    let weight_sum = weights.sum();
    if weight_sum <= 0.0 {
        return NEUTRAL_SCORE;
    }

    let sub_weights = weights.as_array();
    let weighted: f64 = Indicator::ALL
        .iter()
        .zip(sub_weights.iter())
        .map(|(indicator, weight)| store.normalized(*indicator, snapshot.get(*indicator)) * weight)
        .sum();

    (weighted / weight_sum).clamp(0.0, 100.0)
}
