//! Sleep-Bound Workloads
//!
//! A profiler session classic: one function that is slow because of a single
//! long stall, another that is cheap per call but invoked thousands of times,
//! and a composite that layers both. Wall-clock profilers see the stall
//! immediately; call-counting profilers see the chatter. The point is that
//! they disagree.

use crate::catalog::WorkloadScale;
use std::thread;
use std::time::Duration;

/// Stall length of the single slow call.
pub const LONG_STALL: Duration = Duration::from_secs(3);

/// Stall length at the top of the composite run.
pub const MID_STALL: Duration = Duration::from_secs(1);

/// Stall length of one cheap, frequently-made call.
pub const SHORT_STALL: Duration = Duration::from_millis(1);

/// How many cheap calls the composite run makes.
pub const CHATTER_CALLS: u32 = 10_000;

/// Identity with one long stall. Slow because of a single call site.
pub fn stalled_identity(x: u64, stall: Duration) -> u64 {
    thread::sleep(stall);
    x
}

/// Identity with a short stall. Cheap per call, expensive in aggregate.
pub fn chattering_identity(x: u64, stall: Duration) -> u64 {
    thread::sleep(stall);
    x
}

/// The composite run: a mid-level stall, one long-stalled call, then
/// [`CHATTER_CALLS`] cheap calls whose results accumulate.
///
/// Returns `x * (1 + CHATTER_CALLS)` regardless of scale; only the time
/// changes. With default scale the run takes roughly 3 + 1 + 10 seconds.
pub fn layered_stall(x: u64, scale: &WorkloadScale) -> u64 {
    thread::sleep(scale.scaled(MID_STALL));
    let mut result = stalled_identity(x, scale.scaled(LONG_STALL));
    for _ in 0..CHATTER_CALLS {
        result += chattering_identity(x, scale.scaled(SHORT_STALL));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests run with time_scale = 0 so nothing here actually stalls.
    fn instant_scale() -> WorkloadScale {
        WorkloadScale {
            time_scale: 0.0,
            ..WorkloadScale::default()
        }
    }

    #[test]
    fn test_identities_return_their_input() {
        assert_eq!(stalled_identity(7, Duration::ZERO), 7);
        assert_eq!(chattering_identity(7, Duration::ZERO), 7);
    }

    #[test]
    fn test_layered_stall_accumulates_every_call() {
        let result = layered_stall(1, &instant_scale());
        assert_eq!(result, 1 + u64::from(CHATTER_CALLS));
    }

    #[test]
    fn test_layered_stall_scales_with_input() {
        let scale = instant_scale();
        assert_eq!(layered_stall(3, &scale), 3 * (1 + u64::from(CHATTER_CALLS)));
    }

    #[test]
    fn test_stall_actually_stalls() {
        let timed = lento_core::time(|| stalled_identity(1, Duration::from_millis(20)));
        assert_eq!(timed.value, 1);
        assert!(timed.elapsed >= Duration::from_millis(10));
    }
}
