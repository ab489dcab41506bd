use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Languages the intake form offers; anything else is rejected at the
/// boundary. The scorers themselves treat arbitrary strings leniently.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "Korean",
    "English",
    "Japanese",
    "Chinese",
    "Spanish",
    "French",
    "German",
    "Portuguese",
    "Russian",
    "Vietnamese",
    "Arabic",
];

/// ISCO-08 major groups used as the job-field taxonomy, single-digit codes.
const ISCO_MAJOR_GROUPS: &[(&str, &str, &str)] = &[
    ("0", "군인", "Armed forces occupations"),
    ("1", "관리자", "Managers"),
    ("2", "전문가", "Professionals"),
    ("3", "기술공 및 준전문가", "Technicians and associate professionals"),
    ("4", "사무 종사자", "Clerical support workers"),
    ("5", "서비스·판매 종사자", "Service and sales workers"),
    ("6", "농림어업 숙련 종사자", "Skilled agricultural, forestry and fishery workers"),
    ("7", "기능원 및 관련 기능 종사자", "Craft and related trades workers"),
    ("8", "장치·기계 조작 및 조립 종사자", "Plant and machine operators and assemblers"),
    ("9", "단순노무 종사자", "Elementary occupations"),
];

/// Occupational field declared by the user, ISCO-08 major group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobField {
    pub code: String,
    pub name_ko: String,
    pub name_en: String,
}

impl JobField {
    /// Build the canonical field for a single-digit major-group code.
    pub fn from_code(code: &str) -> Option<Self> {
        ISCO_MAJOR_GROUPS
            .iter()
            .find(|(group, _, _)| *group == code)
            .map(|(group, ko, en)| Self {
                code: (*group).to_string(),
                name_ko: (*ko).to_string(),
                name_en: (*en).to_string(),
            })
    }

    pub fn is_valid_code(code: &str) -> bool {
        ISCO_MAJOR_GROUPS.iter().any(|(group, _, _)| *group == code)
    }
}

/// Immutable input to a scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub language: String,
    pub job_field: JobField,
    pub quality_of_life_weights: QualityOfLifeWeights,
}

impl UserProfile {
    /// Boundary validation: supported language, known job-field code, and
    /// well-formed quality-of-life sub-weights.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let language = self.language.trim();
        if language.is_empty()
            || !SUPPORTED_LANGUAGES
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(language))
        {
            return Err(ValidationError::UnsupportedLanguage(self.language.clone()));
        }

        if !JobField::is_valid_code(&self.job_field.code) {
            return Err(ValidationError::InvalidJobField(self.job_field.code.clone()));
        }

        self.quality_of_life_weights.validate()
    }
}

/// Country snapshot supplied by the catalog collaborator, read-only during
/// scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    /// ISO 3166-1 alpha-3.
    pub code: String,
    pub region: String,
    pub languages: Vec<String>,
    #[serde(default)]
    pub gdp_per_capita: Option<f64>,
    #[serde(default)]
    pub employment_rate: Option<f64>,
    /// Employment rate per ISCO major group, where the source publishes it.
    #[serde(default)]
    pub occupation_employment: BTreeMap<String, f64>,
    #[serde(default)]
    pub population: Option<u64>,
}

/// Caller-declared weights for the three criteria. Valid shapes are either
/// all-zero (the engine substitutes the documented 30/30/40 default) or
/// multiples of ten summing to exactly 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    pub language: u32,
    pub job: u32,
    pub quality_of_life: u32,
}

impl Weights {
    /// The documented substitution applied when a caller declares no weights.
    pub const fn default_split() -> Self {
        Self {
            language: 30,
            job: 30,
            quality_of_life: 40,
        }
    }

    pub const fn is_unset(&self) -> bool {
        self.language == 0 && self.job == 0 && self.quality_of_life == 0
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_unset() {
            return Ok(());
        }

        if self.language % 10 != 0 || self.job % 10 != 0 || self.quality_of_life % 10 != 0 {
            return Err(ValidationError::WeightGranularity);
        }

        let sum = self.language + self.job + self.quality_of_life;
        if sum != 100 {
            return Err(ValidationError::WeightSum { sum });
        }

        Ok(())
    }

    /// Weights actually applied to a run: the declared triple, or the
    /// default split when the caller left everything at zero.
    pub fn effective(&self) -> Self {
        if self.is_unset() {
            Self::default_split()
        } else {
            *self
        }
    }
}

/// Sub-weights for the quality-of-life composite; non-negative, summing to
/// 100 at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityOfLifeWeights {
    pub income: f64,
    pub jobs: f64,
    pub health: f64,
    pub life_satisfaction: f64,
    pub safety: f64,
}

impl QualityOfLifeWeights {
    pub const fn even_split() -> Self {
        Self {
            income: 20.0,
            jobs: 20.0,
            health: 20.0,
            life_satisfaction: 20.0,
            safety: 20.0,
        }
    }

    pub fn as_array(&self) -> [f64; 5] {
        [
            self.income,
            self.jobs,
            self.health,
            self.life_satisfaction,
            self.safety,
        ]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.as_array().iter().any(|weight| *weight < 0.0) {
            return Err(ValidationError::NegativeQualityWeight);
        }

        let sum = self.sum();
        if (sum - 100.0).abs() > 1e-6 {
            return Err(ValidationError::QualityWeightSum { sum });
        }

        Ok(())
    }
}

impl Default for QualityOfLifeWeights {
    fn default() -> Self {
        Self::even_split()
    }
}

/// Per-criterion scores for one country, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionScores {
    pub language_score: f64,
    pub job_score: f64,
    pub quality_of_life_score: f64,
}

/// Internal scoring result; the weighted score is always derived from the
/// sub-scores, never persisted on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCountry {
    pub country: CountryRecord,
    pub scores: CriterionScores,
    pub weighted_score: f64,
}

/// Effective criterion weights normalized to 0-1 fractions for the output
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppliedWeights {
    pub language: f64,
    pub job: f64,
    pub quality_of_life: f64,
}

impl From<Weights> for AppliedWeights {
    fn from(weights: Weights) -> Self {
        Self {
            language: f64::from(weights.language) / 100.0,
            job: f64::from(weights.job) / 100.0,
            quality_of_life: f64::from(weights.quality_of_life) / 100.0,
        }
    }
}

/// Identity subset of a country exposed in the response contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub name: String,
    pub code: String,
    pub region: String,
}

impl From<&CountryRecord> for CountrySummary {
    fn from(country: &CountryRecord) -> Self {
        Self {
            name: country.name.clone(),
            code: country.code.clone(),
            region: country.region.clone(),
        }
    }
}

/// Per-recommendation score breakdown with the applied weight fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub language_score: f64,
    pub job_score: f64,
    pub quality_of_life_score: f64,
    pub applied_weights: AppliedWeights,
}

/// Externally visible, ordered, explained result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 1-based position in the final sort order.
    pub rank: u32,
    pub country: CountrySummary,
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
    pub reasons: Vec<String>,
}

/// Response contract: the ranked list plus the weights that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub applied_weights: AppliedWeights,
    pub total_candidates: usize,
    pub recommendations: Vec<Recommendation>,
}

/// Caller-input failures rejected before any scoring begins.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("criterion weights must sum to 100, got {sum}")]
    WeightSum { sum: u32 },
    #[error("criterion weights must be multiples of 10")]
    WeightGranularity,
    #[error("unsupported language '{0}'")]
    UnsupportedLanguage(String),
    #[error("job field code must be one of the ISCO-08 major groups 0-9, got '{0}'")]
    InvalidJobField(String),
    #[error("quality-of-life weights must be non-negative")]
    NegativeQualityWeight,
    #[error("quality-of-life weights must sum to 100, got {sum}")]
    QualityWeightSum { sum: f64 },
}
