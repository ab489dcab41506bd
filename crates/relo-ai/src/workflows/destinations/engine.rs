use std::cmp::Ordering;

use crate::workflows::destinations::domain::{
    AppliedWeights, CountryRecord, CountrySummary, CriterionScores, Recommendation,
    RecommendationReport, ScoreBreakdown, ScoredCountry, UserProfile, Weights,
};
use crate::workflows::destinations::indicators::{IndicatorError, IndicatorStore};
use crate::workflows::destinations::reasons::generate_reasons;
use crate::workflows::destinations::scoring::{job_score, language_score, quality_of_life_score};

/// Number of recommendations returned when the caller does not ask for a
/// specific count.
pub const DEFAULT_TOP_K: usize = 5;

/// Stateless ranking engine over pre-validated inputs.
///
/// Construction loads (or reuses) the shared indicator table; ranking itself
/// is a pure transformation and carries no mutable state between runs.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine {
    store: IndicatorStore,
}

impl RecommendationEngine {
    pub fn new() -> Result<Self, IndicatorError> {
        Ok(Self {
            store: IndicatorStore::load()?,
        })
    }

    pub const fn store(&self) -> &IndicatorStore {
        &self.store
    }

    /// Score one country on all three criteria and derive its weighted score.
    pub fn score_country(
        &self,
        profile: &UserProfile,
        weights: Weights,
        country: &CountryRecord,
    ) -> ScoredCountry {
        let scores = CriterionScores {
            language_score: language_score(&profile.language, country),
            job_score: job_score(profile, country),
            quality_of_life_score: quality_of_life_score(
                &profile.quality_of_life_weights,
                country,
                &self.store,
            ),
        };

        // Weights arrive as whole percentages; re-normalize here instead of
        // assuming callers pass fractions.
        let weighted_score = scores.language_score * (f64::from(weights.language) / 100.0)
            + scores.job_score * (f64::from(weights.job) / 100.0)
            + scores.quality_of_life_score * (f64::from(weights.quality_of_life) / 100.0);

        ScoredCountry {
            country: country.clone(),
            scores,
            weighted_score,
        }
    }

    /// Rank a catalog of countries for a profile under the given weights.
    ///
    /// Sorting is deterministic: descending weighted score, ties broken by
    /// ascending ISO3 code so the output never depends on catalog fetch
    /// order. All emitted scores are rounded to two decimals, half away
    /// from zero. An empty catalog yields an empty report.
    pub fn rank(
        &self,
        profile: &UserProfile,
        weights: Weights,
        countries: &[CountryRecord],
        top_k: usize,
    ) -> RecommendationReport {
        let effective = weights.effective();
        let applied_weights = AppliedWeights::from(effective);

        let mut scored: Vec<ScoredCountry> = countries
            .iter()
            .map(|country| self.score_country(profile, effective, country))
            .collect();

        scored.sort_by(|a, b| {
            b.weighted_score
                .partial_cmp(&a.weighted_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.country.code.cmp(&b.country.code))
        });

        let recommendations = scored
            .iter()
            .take(top_k)
            .enumerate()
            .map(|(index, entry)| {
                let reasons = generate_reasons(&entry.scores, &entry.country, &profile.job_field);
                Recommendation {
                    rank: index as u32 + 1,
                    country: CountrySummary::from(&entry.country),
                    total_score: round2(entry.weighted_score),
                    breakdown: ScoreBreakdown {
                        language_score: round2(entry.scores.language_score),
                        job_score: round2(entry.scores.job_score),
                        quality_of_life_score: round2(entry.scores.quality_of_life_score),
                        applied_weights,
                    },
                    reasons,
                }
            })
            .collect();

        RecommendationReport {
            applied_weights,
            total_candidates: countries.len(),
            recommendations,
        }
    }
}

/// Round to two decimals, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(72.125), 72.13);
        assert_eq!(round2(72.124), 72.12);
        assert_eq!(round2(-0.005), -0.01);
    }
}
