use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use super::domain::CountryRecord;

/// Country-catalog collaborator. Implementations may be slow or networked;
/// the engine never calls this directly, the service resolves it first.
pub trait CountryCatalog: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<CountryRecord>, CatalogError>;
}

/// Error enumeration for catalog failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("country catalog unavailable: {0}")]
    Unavailable(String),
    #[error("country catalog returned malformed data: {0}")]
    Malformed(String),
}

/// Read-through cache with an explicit TTL, replacing incidental
/// cross-request memoization of the upstream catalog.
pub struct CachedCatalog<C> {
    inner: C,
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

struct CacheEntry {
    fetched_at: DateTime<Utc>,
    countries: Vec<CountryRecord>,
}

impl<C: CountryCatalog> CachedCatalog<C> {
    pub fn new(inner: C, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entry: Mutex::new(None),
        }
    }

    fn fetch_at(&self, now: DateTime<Utc>) -> Result<Vec<CountryRecord>, CatalogError> {
        let mut guard = self.entry.lock().expect("catalog cache mutex poisoned");

        if let Some(entry) = guard.as_ref() {
            if now - entry.fetched_at < self.ttl {
                return Ok(entry.countries.clone());
            }
        }

        let countries = self.inner.fetch_all()?;
        *guard = Some(CacheEntry {
            fetched_at: now,
            countries: countries.clone(),
        });
        Ok(countries)
    }
}

impl<C: CountryCatalog> CountryCatalog for CachedCatalog<C> {
    fn fetch_all(&self) -> Result<Vec<CountryRecord>, CatalogError> {
        self.fetch_at(Utc::now())
    }
}

/// In-memory catalog used by the demo command, the default server wiring,
/// and tests.
#[derive(Default, Clone)]
pub struct StaticCountryCatalog {
    countries: Vec<CountryRecord>,
}

impl StaticCountryCatalog {
    pub fn new(countries: Vec<CountryRecord>) -> Self {
        Self { countries }
    }

    /// The built-in destination set shipped with the service.
    pub fn seed() -> Self {
        Self::new(seed_countries())
    }
}

impl CountryCatalog for StaticCountryCatalog {
    fn fetch_all(&self) -> Result<Vec<CountryRecord>, CatalogError> {
        Ok(self.countries.clone())
    }
}

fn country(
    name: &str,
    code: &str,
    region: &str,
    languages: &[&str],
    gdp_per_capita: Option<f64>,
    employment_rate: Option<f64>,
    occupation_employment: &[(&str, f64)],
    population: Option<u64>,
) -> CountryRecord {
    CountryRecord {
        name: name.to_string(),
        code: code.to_string(),
        region: region.to_string(),
        languages: languages.iter().map(|language| language.to_string()).collect(),
        gdp_per_capita,
        employment_rate,
        occupation_employment: occupation_employment
            .iter()
            .map(|(group, rate)| ((*group).to_string(), *rate))
            .collect::<BTreeMap<_, _>>(),
        population,
    }
}

fn seed_countries() -> Vec<CountryRecord> {
    vec![
        country(
            "United States",
            "USA",
            "Americas",
            &["English"],
            Some(76_399.0),
            Some(71.0),
            &[("1", 74.0), ("2", 78.0), ("5", 69.0)],
            Some(333_300_000),
        ),
        country(
            "Canada",
            "CAN",
            "Americas",
            &["English", "French"],
            Some(55_522.0),
            Some(70.0),
            &[("2", 75.0), ("6", 68.0), ("7", 71.0)],
            Some(38_930_000),
        ),
        country(
            "Germany",
            "DEU",
            "Europe",
            &["German"],
            Some(48_718.0),
            Some(77.0),
            &[("2", 79.0), ("3", 81.0), ("7", 78.0), ("8", 76.0)],
            Some(83_800_000),
        ),
        country(
            "United Kingdom",
            "GBR",
            "Europe",
            &["English"],
            Some(45_850.0),
            Some(75.0),
            &[("1", 76.0), ("2", 77.0)],
            Some(66_970_000),
        ),
        country(
            "Australia",
            "AUS",
            "Oceania",
            &["English"],
            Some(64_003.0),
            Some(77.0),
            &[("5", 74.0), ("6", 72.0), ("7", 75.0)],
            Some(26_010_000),
        ),
        country(
            "Japan",
            "JPN",
            "Asia",
            &["Japanese"],
            Some(33_815.0),
            Some(78.0),
            &[("3", 79.0), ("8", 77.0)],
            Some(125_100_000),
        ),
        country(
            "South Korea",
            "KOR",
            "Asia",
            &["Korean"],
            Some(32_423.0),
            Some(68.0),
            &[("2", 71.0), ("8", 70.0)],
            Some(51_630_000),
        ),
        country(
            "Netherlands",
            "NLD",
            "Europe",
            &["Dutch", "English"],
            Some(57_025.0),
            Some(82.0),
            &[("2", 83.0), ("4", 80.0)],
            Some(17_700_000),
        ),
        country(
            "Sweden",
            "SWE",
            "Europe",
            &["Swedish", "English"],
            Some(56_188.0),
            Some(77.0),
            &[("2", 79.0)],
            Some(10_490_000),
        ),
        country(
            "New Zealand",
            "NZL",
            "Oceania",
            &["English", "Maori"],
            Some(48_249.0),
            Some(79.0),
            &[("5", 76.0), ("6", 78.0)],
            Some(5_120_000),
        ),
        country(
            "France",
            "FRA",
            "Europe",
            &["French"],
            Some(40_886.0),
            Some(68.0),
            &[("2", 70.0), ("5", 66.0)],
            Some(67_970_000),
        ),
        country(
            "Spain",
            "ESP",
            "Europe",
            &["Spanish"],
            Some(29_350.0),
            Some(64.0),
            &[("5", 62.0)],
            Some(47_780_000),
        ),
        country(
            "Czechia",
            "CZE",
            "Europe",
            &["Czech"],
            Some(26_821.0),
            Some(75.0),
            &[("3", 77.0), ("8", 76.0)],
            Some(10_510_000),
        ),
        country(
            "Singapore",
            "SGP",
            "Asia",
            &["English", "Malay", "Mandarin", "Tamil"],
            Some(82_808.0),
            Some(70.0),
            &[("1", 73.0), ("2", 74.0)],
            Some(5_640_000),
        ),
    ]
}
