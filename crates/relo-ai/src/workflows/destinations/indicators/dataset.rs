use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Deserializer};
use tracing::warn;

use super::{Indicator, IndicatorError, IndicatorSnapshot};

/// Bundled OECD Better Life Index extract, five sub-indicators per country
/// on their native 0-10 scale.
pub(crate) const EMBEDDED_DATASET: &str = include_str!("better_life_2024.csv");

/// Parse the indicator table. Rows missing any of the five sub-indicators
/// are skipped entirely; they must not contribute to normalization bounds.
pub(crate) fn parse_dataset<R: Read>(
    reader: R,
) -> Result<BTreeMap<String, IndicatorSnapshot>, IndicatorError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut snapshots = BTreeMap::new();
    for record in csv_reader.deserialize::<DatasetRow>() {
        let row = record.map_err(|source| IndicatorError::Corrupt(source.to_string()))?;
        match row.snapshot() {
            Some(snapshot) => {
                snapshots.insert(row.code.to_ascii_uppercase(), snapshot);
            }
            None => {
                warn!(country = %row.country, code = %row.code, "incomplete indicator row skipped");
            }
        }
    }

    if snapshots.is_empty() {
        return Err(IndicatorError::Empty);
    }

    Ok(snapshots)
}

/// Collect every known raw value for one indicator, in dataset order.
pub(crate) fn raw_values(
    snapshots: &BTreeMap<String, IndicatorSnapshot>,
    indicator: Indicator,
) -> Vec<f64> {
    snapshots
        .values()
        .map(|snapshot| snapshot.get(indicator))
        .collect()
}

#[derive(Debug, Deserialize)]
struct DatasetRow {
    code: String,
    country: String,
    #[serde(default, deserialize_with = "empty_field_as_none")]
    income: Option<f64>,
    #[serde(default, deserialize_with = "empty_field_as_none")]
    jobs: Option<f64>,
    #[serde(default, deserialize_with = "empty_field_as_none")]
    health: Option<f64>,
    #[serde(default, deserialize_with = "empty_field_as_none")]
    life_satisfaction: Option<f64>,
    #[serde(default, deserialize_with = "empty_field_as_none")]
    safety: Option<f64>,
}

impl DatasetRow {
    fn snapshot(&self) -> Option<IndicatorSnapshot> {
        Some(IndicatorSnapshot {
            income: self.income?,
            jobs: self.jobs?,
            health: self.health?,
            life_satisfaction: self.life_satisfaction?,
            safety: self.safety?,
        })
    }
}

fn empty_field_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.filter(|value| !value.trim().is_empty())
        .map(|value| value.trim().parse::<f64>().map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "code,country,income,jobs,health,life_satisfaction,safety\n";

    #[test]
    fn parses_complete_rows() {
        let csv = format!("{HEADER}KOR,South Korea,5.1,7.0,8.1,5.4,8.4\n");
        let snapshots = parse_dataset(Cursor::new(csv)).expect("dataset parses");
        let korea = snapshots.get("KOR").expect("korea present");
        assert_eq!(korea.income, 5.1);
        assert_eq!(korea.safety, 8.4);
    }

    #[test]
    fn skips_rows_with_missing_indicators() {
        let csv = format!(
            "{HEADER}KOR,South Korea,5.1,7.0,8.1,5.4,8.4\nZAF,South Africa,1.2,3.5,2.6,4.0,\n"
        );
        let snapshots = parse_dataset(Cursor::new(csv)).expect("dataset parses");
        assert!(snapshots.contains_key("KOR"));
        assert!(!snapshots.contains_key("ZAF"));
    }

    #[test]
    fn rejects_unparseable_numbers() {
        let csv = format!("{HEADER}KOR,South Korea,abc,7.0,8.1,5.4,8.4\n");
        let error = parse_dataset(Cursor::new(csv)).expect_err("expected corrupt dataset");
        assert!(matches!(error, IndicatorError::Corrupt(_)));
    }

    #[test]
    fn rejects_dataset_with_no_usable_rows() {
        let csv = format!("{HEADER}ZAF,South Africa,1.2,3.5,2.6,4.0,\n");
        let error = parse_dataset(Cursor::new(csv)).expect_err("expected empty dataset");
        assert!(matches!(error, IndicatorError::Empty));
    }

    #[test]
    fn embedded_dataset_parses_and_filters_partial_rows() {
        let snapshots =
            parse_dataset(Cursor::new(EMBEDDED_DATASET)).expect("embedded dataset parses");
        // CRI and ZAF ship with gaps and must be filtered out.
        assert!(!snapshots.contains_key("CRI"));
        assert!(!snapshots.contains_key("ZAF"));
        assert!(snapshots.len() >= 30);
    }
}
