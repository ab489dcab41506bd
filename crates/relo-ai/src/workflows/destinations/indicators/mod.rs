//! Static quality-of-life indicator table with process-wide caching.
//!
//! The table is parsed from a bundled CSV extract on first access and kept
//! for the lifetime of the process, together with the normalization bounds
//! derived from it. Countries resolve by ISO3 code first, then through the
//! localized and English name alias tables.

mod aliases;
mod dataset;
mod normalizer;

use std::collections::BTreeMap;
use std::io::Cursor;
use std::sync::OnceLock;

use tracing::debug;

pub(crate) use normalizer::NEUTRAL_SCORE;
use normalizer::ScaleBounds;

/// The five quality-of-life sub-indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Income,
    Jobs,
    Health,
    LifeSatisfaction,
    Safety,
}

impl Indicator {
    pub const ALL: [Indicator; 5] = [
        Indicator::Income,
        Indicator::Jobs,
        Indicator::Health,
        Indicator::LifeSatisfaction,
        Indicator::Safety,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Indicator::Income => "income",
            Indicator::Jobs => "jobs",
            Indicator::Health => "health",
            Indicator::LifeSatisfaction => "life_satisfaction",
            Indicator::Safety => "safety",
        }
    }

    const fn index(self) -> usize {
        match self {
            Indicator::Income => 0,
            Indicator::Jobs => 1,
            Indicator::Health => 2,
            Indicator::LifeSatisfaction => 3,
            Indicator::Safety => 4,
        }
    }
}

/// Raw sub-indicator values for one country on their native scale.
/// A snapshot only exists when all five values are known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSnapshot {
    pub income: f64,
    pub jobs: f64,
    pub health: f64,
    pub life_satisfaction: f64,
    pub safety: f64,
}

impl IndicatorSnapshot {
    pub const fn get(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::Income => self.income,
            Indicator::Jobs => self.jobs,
            Indicator::Health => self.health,
            Indicator::LifeSatisfaction => self.life_satisfaction,
            Indicator::Safety => self.safety,
        }
    }
}

/// A corrupt or unusable indicator table fails the whole ranking call; it is
/// never silently degraded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndicatorError {
    #[error("indicator dataset is corrupt: {0}")]
    Corrupt(String),
    #[error("indicator dataset contains no usable rows")]
    Empty,
}

#[derive(Debug)]
struct IndicatorData {
    snapshots: BTreeMap<String, IndicatorSnapshot>,
    bounds: [ScaleBounds; 5],
}

static DATA: OnceLock<Result<IndicatorData, IndicatorError>> = OnceLock::new();

/// Handle onto the process-wide indicator table and normalization bounds.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorStore {
    data: &'static IndicatorData,
}

impl IndicatorStore {
    /// Load (or reuse) the shared dataset. Concurrent first callers block on
    /// the same initialization; nobody redoes the work.
    pub fn load() -> Result<Self, IndicatorError> {
        let data = DATA.get_or_init(|| {
            let snapshots = dataset::parse_dataset(Cursor::new(dataset::EMBEDDED_DATASET))?;
            let bounds = compute_bounds(&snapshots);
            debug!(countries = snapshots.len(), "indicator dataset loaded");
            Ok(IndicatorData { snapshots, bounds })
        });

        match data {
            Ok(data) => Ok(Self { data }),
            Err(error) => Err(error.clone()),
        }
    }

    /// Look up the snapshot for a country identifier (ISO3 code or name).
    /// Absence means "not covered"; callers substitute the neutral default.
    pub fn snapshot(&self, identifier: &str) -> Option<&IndicatorSnapshot> {
        let code = identifier.trim().to_ascii_uppercase();
        if let Some(snapshot) = self.data.snapshots.get(&code) {
            return Some(snapshot);
        }

        let resolved = aliases::code_for_name(identifier)?;
        self.data.snapshots.get(resolved)
    }

    /// Convert a raw indicator value into its 0-100 comparable score using
    /// the cached population bounds.
    pub fn normalized(&self, indicator: Indicator, value: f64) -> f64 {
        self.data.bounds[indicator.index()].scale(value)
    }

    /// Number of countries with a complete snapshot.
    pub fn coverage(&self) -> usize {
        self.data.snapshots.len()
    }
}

fn compute_bounds(snapshots: &BTreeMap<String, IndicatorSnapshot>) -> [ScaleBounds; 5] {
    Indicator::ALL.map(|indicator| {
        let values = dataset::raw_values(snapshots, indicator);
        ScaleBounds::from_values(&values)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_by_code_name_and_alias() {
        let store = IndicatorStore::load().expect("dataset loads");
        assert!(store.snapshot("KOR").is_some());
        assert!(store.snapshot("kor").is_some());
        assert!(store.snapshot("South Korea").is_some());
        assert!(store.snapshot("대한민국").is_some());
    }

    #[test]
    fn unknown_identifiers_are_absent_not_errors() {
        let store = IndicatorStore::load().expect("dataset loads");
        assert!(store.snapshot("Atlantis").is_none());
        assert!(store.snapshot("XXX").is_none());
    }

    #[test]
    fn normalized_scores_stay_in_range() {
        let store = IndicatorStore::load().expect("dataset loads");
        for indicator in Indicator::ALL {
            for snapshot in [store.snapshot("KOR"), store.snapshot("USA")] {
                let snapshot = snapshot.expect("snapshot present");
                let score = store.normalized(indicator, snapshot.get(indicator));
                assert!((0.0..=100.0).contains(&score), "{indicator:?} -> {score}");
            }
        }
    }

    #[test]
    fn repeated_loads_share_the_same_table() {
        let first = IndicatorStore::load().expect("dataset loads");
        let second = IndicatorStore::load().expect("dataset loads");
        assert_eq!(first.coverage(), second.coverage());
    }
}
