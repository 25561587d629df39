#![warn(missing_docs)]
//! Lento Workloads - Characterized Profiling Fodder
//!
//! Each workload here has a known, deliberate performance shape so that a
//! profiler pointed at it has something honest to find:
//! - **Sleep-bound**: one long stall hidden under thousands of cheap calls
//! - **CPU-bound**: sine summation, serial and rayon-parallel
//! - **Allocation-heavy**: churn through a large scaled buffer
//! - **Mixed**: all of the above in one run
//!
//! The static [`catalog`] names every workload so drivers can list, filter,
//! and run them uniformly.

mod catalog;
mod sleep;
mod sums;

pub use catalog::{WorkloadDef, WorkloadKind, WorkloadScale, catalog, find};
pub use sleep::{
    CHATTER_CALLS, LONG_STALL, MID_STALL, SHORT_STALL, chattering_identity, layered_stall,
    stalled_identity,
};
pub use sums::{
    DEFAULT_ALLOC_LEN, DEFAULT_ELEMENTS, alloc_scaled, combined_sums, sine_sum_parallel,
    sine_sum_serial,
};
