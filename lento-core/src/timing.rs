//! Wall-Clock Timing
//!
//! Minimal timing primitives for observing workload runs. Measurements are
//! plain `std::time::Instant` wall-clock readings — good enough to tell a
//! 3-second stall from a 1-millisecond chatter, which is all the workload
//! catalog asks of them.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Running wall-clock timer.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Start a new stopwatch.
    #[inline]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time since start.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed nanoseconds since start, saturating at `u64::MAX`.
    #[inline]
    pub fn elapsed_ns(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// A value together with how long it took to produce.
#[derive(Debug, Clone, Copy)]
pub struct Timed<T> {
    /// The closure's return value.
    pub value: T,
    /// Wall-clock time the closure ran for.
    pub elapsed: Duration,
}

/// Run a closure once and time it.
pub fn time<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let watch = Stopwatch::start();
    let value = black_box(f());
    Timed {
        value,
        elapsed: watch.elapsed(),
    }
}

/// Run a closure `runs` times, returning per-run nanosecond samples.
///
/// Return values are passed through `black_box` so the optimizer cannot
/// elide the work being measured.
pub fn sample_runs<T>(runs: usize, mut f: impl FnMut() -> T) -> Vec<u64> {
    let mut samples = Vec::with_capacity(runs);
    for _ in 0..runs {
        let watch = Stopwatch::start();
        let _ = black_box(f());
        samples.push(watch.elapsed_ns());
    }
    samples
}
