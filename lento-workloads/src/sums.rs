//! Summation Workloads
//!
//! CPU-bound sine summation in two shapes — a sequential iterator chain and a
//! rayon-parallel reduction — plus an allocation-churn pass through a large
//! buffer. The two sums must agree up to floating-point reassociation; the
//! interesting difference is where the time goes, not what comes back.

use rayon::prelude::*;

/// Default number of terms summed.
pub const DEFAULT_ELEMENTS: usize = 100_000;

/// Default length of the churn buffer.
pub const DEFAULT_ALLOC_LEN: usize = 1_000_000;

/// Σ sin(x) for x in 0..n, sequentially.
pub fn sine_sum_serial(n: usize) -> f64 {
    (0..n).map(|x| (x as f64).sin()).sum()
}

/// Σ sin(x) for x in 0..n, reduced in parallel across the rayon pool.
pub fn sine_sum_parallel(n: usize) -> f64 {
    (0..n).into_par_iter().map(|x| (x as f64).sin()).sum()
}

/// Allocate a zeroed buffer of `len` and scale it by 0.5.
///
/// The value is uninteresting; the two allocations are the workload.
pub fn alloc_scaled(len: usize) -> Vec<f64> {
    let zeros = vec![0.0f64; len];
    zeros.iter().map(|v| v * 0.5).collect()
}

/// One combined summation run over `n` terms: parallel sum, serial sum, and
/// a churn buffer of `10 * n` in between. Returns the two sums' total.
pub fn combined_sums(n: usize) -> f64 {
    let sum1 = sine_sum_parallel(n);
    let sum2 = sine_sum_serial(n);
    let _churn = alloc_scaled(n.saturating_mul(10));
    sum1 + sum2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_and_parallel_sums_agree() {
        let serial = sine_sum_serial(10_000);
        let parallel = sine_sum_parallel(10_000);

        // Reassociation is the only permitted difference.
        assert!((serial - parallel).abs() < 1e-9, "serial {serial} vs parallel {parallel}");
    }

    #[test]
    fn test_sine_sum_known_value() {
        // Σ sin(x) for x in 0..10_000 — partial sums stay bounded.
        let sum = sine_sum_serial(10_000);
        assert!((sum - 1.9395054106806988).abs() < 1e-6);
    }

    #[test]
    fn test_sine_sum_empty_range() {
        assert_eq!(sine_sum_serial(0), 0.0);
        assert_eq!(sine_sum_parallel(0), 0.0);
    }

    #[test]
    fn test_default_churn_is_ten_times_the_default_elements() {
        assert_eq!(DEFAULT_ALLOC_LEN, 10 * DEFAULT_ELEMENTS);
    }

    #[test]
    fn test_alloc_scaled_shape() {
        let buffer = alloc_scaled(1_024);
        assert_eq!(buffer.len(), 1_024);
        assert!(buffer.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_combined_sums_is_twice_the_single_sum() {
        let n = 2_000;
        let combined = combined_sums(n);
        let single = sine_sum_serial(n);

        assert!((combined - 2.0 * single).abs() < 1e-9);
    }

    #[test]
    fn test_sums_are_deterministic() {
        assert_eq!(sine_sum_serial(5_000), sine_sum_serial(5_000));
        let a = sine_sum_parallel(5_000);
        let b = sine_sum_parallel(5_000);
        assert!((a - b).abs() < 1e-9);
    }
}
