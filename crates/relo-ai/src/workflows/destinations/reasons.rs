use crate::workflows::destinations::domain::{CountryRecord, CriterionScores, JobField};

const LANGUAGE_THRESHOLD: f64 = 70.0;
const QUALITY_THRESHOLD: f64 = 80.0;
const JOB_THRESHOLD: f64 = 75.0;
const GDP_THRESHOLD: f64 = 40_000.0;
const EMPLOYMENT_THRESHOLD: f64 = 65.0;
const MAX_REASONS: usize = 4;

/// Produce the 1-4 human-readable reasons for a ranked country. The
/// thresholds and texts are part of the observable contract and must stay
/// stable across releases.
pub(crate) fn generate_reasons(
    scores: &CriterionScores,
    country: &CountryRecord,
    job_field: &JobField,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if scores.language_score > LANGUAGE_THRESHOLD {
        reasons.push("high language compatibility".to_string());
    }

    if scores.quality_of_life_score > QUALITY_THRESHOLD {
        reasons.push("excellent quality of life".to_string());
    }

    if scores.job_score > JOB_THRESHOLD {
        reasons.push(format!(
            "abundant job opportunities in {}",
            job_field.name_en
        ));
    }

    if country
        .gdp_per_capita
        .map(|gdp| gdp > GDP_THRESHOLD)
        .unwrap_or(false)
    {
        reasons.push("high economic level".to_string());
    }

    if country
        .employment_rate
        .map(|rate| rate > EMPLOYMENT_THRESHOLD)
        .unwrap_or(false)
    {
        reasons.push("high employment rate".to_string());
    }

    reasons.truncate(MAX_REASONS);

    if reasons.is_empty() {
        reasons.push("balanced scores across all criteria".to_string());
    }

    reasons
}
