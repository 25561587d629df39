//! Summary Statistics
//!
//! All statistics are computed over the full sample set. Workload runs here
//! are few and deliberate (a profiling session, not a sampling campaign), so
//! there is no outlier cleaning: a slow run is signal, not noise.

use std::time::Duration;

/// Summary of repeated workload runs, in nanoseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Number of runs summarized.
    pub runs: usize,
    /// Arithmetic mean.
    pub mean_ns: f64,
    /// Median (50th percentile, interpolated).
    pub median_ns: f64,
    /// Sample standard deviation (0 for fewer than 2 runs).
    pub std_dev_ns: f64,
    /// Fastest run.
    pub min_ns: u64,
    /// Slowest run.
    pub max_ns: u64,
    /// 90th percentile (interpolated).
    pub p90_ns: f64,
    /// Total time across all runs.
    pub total_ns: u64,
}

impl RunSummary {
    /// Mean as a `Duration`.
    pub fn mean(&self) -> Duration {
        Duration::from_nanos(self.mean_ns.round() as u64)
    }

    /// Total as a `Duration`.
    pub fn total(&self) -> Duration {
        Duration::from_nanos(self.total_ns)
    }
}

/// Summarize per-run nanosecond samples. Returns `None` for an empty slice.
pub fn summarize(samples_ns: &[u64]) -> Option<RunSummary> {
    if samples_ns.is_empty() {
        return None;
    }

    let runs = samples_ns.len();
    let total_ns: u64 = samples_ns.iter().sum();
    let mean_ns = total_ns as f64 / runs as f64;

    let std_dev_ns = if runs < 2 {
        0.0
    } else {
        let variance = samples_ns
            .iter()
            .map(|&s| (s as f64 - mean_ns).powi(2))
            .sum::<f64>()
            / (runs - 1) as f64;
        variance.sqrt()
    };

    let mut sorted: Vec<f64> = samples_ns.iter().map(|&s| s as f64).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Some(RunSummary {
        runs,
        mean_ns,
        median_ns: percentile(&sorted, 50.0),
        std_dev_ns,
        min_ns: *samples_ns.iter().min().unwrap_or(&0),
        max_ns: *samples_ns.iter().max().unwrap_or(&0),
        p90_ns: percentile(&sorted, 90.0),
        total_ns,
    })
}

/// Linear interpolation between nearest ranks. `sorted` must be ascending.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    match sorted {
        [] => 0.0,
        [only] => *only,
        _ => {
            let rank = (pct / 100.0) * (sorted.len() - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = (lower + 1).min(sorted.len() - 1);
            let fraction = rank - lower as f64;
            sorted[lower] + fraction * (sorted[upper] - sorted[lower])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_samples_yield_none() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_single_run() {
        let summary = summarize(&[1_000]).unwrap();
        assert_eq!(summary.runs, 1);
        assert!((summary.mean_ns - 1_000.0).abs() < f64::EPSILON);
        assert!((summary.median_ns - 1_000.0).abs() < f64::EPSILON);
        assert!((summary.std_dev_ns - 0.0).abs() < f64::EPSILON);
        assert_eq!(summary.min_ns, 1_000);
        assert_eq!(summary.max_ns, 1_000);
        assert_eq!(summary.total_ns, 1_000);
    }

    #[test]
    fn test_basic_summary() {
        let summary = summarize(&[100, 102, 98, 101, 99]).unwrap();

        assert_eq!(summary.runs, 5);
        assert!((summary.mean_ns - 100.0).abs() < 1.0);
        assert!((summary.median_ns - 100.0).abs() < 1.0);
        assert!(summary.std_dev_ns > 0.0 && summary.std_dev_ns < 5.0);
        assert_eq!(summary.min_ns, 98);
        assert_eq!(summary.max_ns, 102);
        assert_eq!(summary.total_ns, 500);
    }

    #[test]
    fn test_median_interpolates_even_count() {
        let summary = summarize(&[10, 20, 30, 40]).unwrap();
        assert!((summary.median_ns - 25.0).abs() < 0.01);
    }

    #[test]
    fn test_p90_sits_in_the_tail() {
        let samples: Vec<u64> = (1..=100).collect();
        let summary = summarize(&samples).unwrap();

        assert!(summary.p90_ns > 89.0 && summary.p90_ns < 92.0);
        assert!(summary.p90_ns > summary.median_ns);
    }

    #[test]
    fn test_duration_accessors() {
        let summary = summarize(&[1_000_000, 3_000_000]).unwrap();
        assert_eq!(summary.mean(), Duration::from_millis(2));
        assert_eq!(summary.total(), Duration::from_millis(4));
    }
}
