#![warn(missing_docs)]
//! Lento Stats - Run Timing Summaries
//!
//! Condenses repeated-run nanosecond samples into the handful of numbers a
//! profiling session actually reads:
//! - Central tendency (mean, median)
//! - Spread (sample standard deviation)
//! - Extremes and tail (min, max, p90 via linear interpolation)

mod summary;

pub use summary::{RunSummary, summarize};
