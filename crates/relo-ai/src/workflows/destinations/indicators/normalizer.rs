/// Neutral score used when a distribution is degenerate or a country is not
/// covered by the indicator population.
pub(crate) const NEUTRAL_SCORE: f64 = 50.0;

/// Effective min/max for one indicator, IQR-clamped so a handful of extreme
/// outliers cannot compress the scoring range for the bulk of countries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScaleBounds {
    min: f64,
    max: f64,
}

impl ScaleBounds {
    /// Compute bounds over the full known population for an indicator.
    ///
    /// Q1/Q3 use floor-index percentiles over the sorted values; the
    /// effective range is the true range clamped to `[Q1 - 1.5*IQR,
    /// Q3 + 1.5*IQR]`.
    pub(crate) fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self { min: 0.0, max: 0.0 };
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let true_min = sorted[0];
        let true_max = sorted[sorted.len() - 1];
        let q1 = percentile_floor(&sorted, 0.25);
        let q3 = percentile_floor(&sorted, 0.75);
        let iqr = q3 - q1;

        Self {
            min: true_min.max(q1 - 1.5 * iqr),
            max: true_max.min(q3 + 1.5 * iqr),
        }
    }

    /// Map a raw value onto 0-100 within the effective bounds, clamped.
    /// A degenerate distribution scores 50 for everyone.
    pub(crate) fn scale(&self, value: f64) -> f64 {
        if self.max == self.min {
            return NEUTRAL_SCORE;
        }

        (100.0 * (value - self.min) / (self.max - self.min)).clamp(0.0, 100.0)
    }
}

fn percentile_floor(sorted: &[f64], quantile: f64) -> f64 {
    let index = ((sorted.len() as f64) * quantile).floor() as usize;
    sorted[index.min(sorted.len() - 1)]
}
