use crate::workflows::destinations::domain::{CountryRecord, UserProfile};

const BASE_SCORE: f64 = 50.0;
const DEVELOPED_ECONOMY_BONUS: f64 = 20.0;

/// Economies granted the flat stability bonus.
const DEVELOPED_ECONOMIES: &[&str] = &[
    "AUS", "AUT", "BEL", "CAN", "CHE", "DEU", "DNK", "FIN", "FRA", "GBR", "IRL", "ISL", "JPN",
    "KOR", "LUX", "NLD", "NOR", "NZL", "SGP", "SWE", "USA",
];

/// Occupation-affinity bonus keyed by (ISCO major group, ISO3). Entries not
/// present default to 0.
const OCCUPATION_AFFINITY: &[(&str, &str, f64)] = &[
    // Managers
    ("1", "USA", 8.0),
    ("1", "GBR", 6.0),
    ("1", "SGP", 7.0),
    ("1", "CHE", 5.0),
    // Professionals
    ("2", "USA", 10.0),
    ("2", "DEU", 8.0),
    ("2", "CAN", 8.0),
    ("2", "GBR", 7.0),
    ("2", "AUS", 7.0),
    ("2", "NLD", 6.0),
    ("2", "SWE", 6.0),
    ("2", "CHE", 6.0),
    // Technicians and associate professionals
    ("3", "DEU", 9.0),
    ("3", "JPN", 7.0),
    ("3", "CZE", 6.0),
    ("3", "AUT", 6.0),
    // Clerical support workers
    ("4", "CAN", 4.0),
    ("4", "AUS", 4.0),
    // Service and sales workers
    ("5", "AUS", 6.0),
    ("5", "CAN", 5.0),
    ("5", "NZL", 5.0),
    ("5", "ESP", 4.0),
    // Skilled agricultural, forestry and fishery workers
    ("6", "NZL", 8.0),
    ("6", "AUS", 7.0),
    ("6", "CAN", 5.0),
    ("6", "DNK", 4.0),
    // Craft and related trades workers
    ("7", "DEU", 8.0),
    ("7", "AUS", 7.0),
    ("7", "CAN", 6.0),
    ("7", "NOR", 5.0),
    // Plant and machine operators and assemblers
    ("8", "DEU", 6.0),
    ("8", "JPN", 6.0),
    ("8", "CZE", 5.0),
    ("8", "KOR", 5.0),
    // Elementary occupations
    ("9", "AUS", 4.0),
    ("9", "CAN", 4.0),
];

/// Score the job-market fit of a country for the user's occupational field.
///
/// Starts from a neutral base; a known employment rate is blended in by
/// averaging its adjusted value with the base. The rate for the user's own
/// ISCO major group takes precedence over the country-wide rate when the
/// source publishes one. A flat bonus applies to developed economies, plus
/// the static occupation-affinity bonus for the (field, country) pair.
pub fn job_score(profile: &UserProfile, country: &CountryRecord) -> f64 {
    let mut score = BASE_SCORE;

    let employment_rate = country
        .occupation_employment
        .get(&profile.job_field.code)
        .copied()
        .or(country.employment_rate);
    if let Some(rate) = employment_rate {
        let adjusted = ((rate - 40.0) * 2.0).clamp(0.0, 100.0);
        score = (BASE_SCORE + adjusted) / 2.0;
    }

    if DEVELOPED_ECONOMIES.contains(&country.code.as_str()) {
        score += DEVELOPED_ECONOMY_BONUS;
    }

    score += affinity_bonus(&profile.job_field.code, &country.code);

    score.clamp(0.0, 100.0)
}

fn affinity_bonus(job_code: &str, country_code: &str) -> f64 {
    OCCUPATION_AFFINITY
        .iter()
        .find(|(group, code, _)| *group == job_code && *code == country_code)
        .map(|(_, _, bonus)| *bonus)
        .unwrap_or(0.0)
}
