use crate::workflows::destinations::domain::CountryRecord;

const FULL_MATCH: f64 = 100.0;
const ENGLISH_FALLBACK: f64 = 30.0;
const NO_MATCH: f64 = 10.0;
const NO_LANGUAGE_DATA: f64 = 0.0;

/// Score how well the user's declared language travels in a country.
///
/// A case-insensitive exact or substring match against any spoken language
/// scores full marks. Failing that, an English-speaking country still offers
/// fallback communicability to a non-English speaker. A record declaring no
/// languages at all carries no signal and scores zero.
pub fn language_score(user_language: &str, country: &CountryRecord) -> f64 {
    if country.languages.is_empty() {
        return NO_LANGUAGE_DATA;
    }

    let wanted = user_language.trim().to_lowercase();
    if wanted.is_empty() {
        return NO_MATCH;
    }

    let spoken_matches = country.languages.iter().any(|spoken| {
        let spoken = spoken.trim().to_lowercase();
        spoken == wanted || spoken.contains(&wanted) || wanted.contains(&spoken)
    });
    if spoken_matches {
        return FULL_MATCH;
    }

    let user_speaks_english = wanted == "english";
    let country_speaks_english = country
        .languages
        .iter()
        .any(|spoken| spoken.trim().eq_ignore_ascii_case("english"));
    if !user_speaks_english && country_speaks_english {
        return ENGLISH_FALLBACK;
    }

    NO_MATCH
}
