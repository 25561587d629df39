#![warn(missing_docs)]
//! # Lento
//!
//! Deliberately slow, precisely characterized workloads for practicing
//! profilers, timers, and test harnesses against:
//! - **Bounded Recursive Sequence Evaluator**: the canonical slow function —
//!   validated input, advisory warnings past a practical threshold, and an
//!   unmemoized exponential recursion kept slow on purpose
//! - **Workload Catalog**: sleep-bound, CPU-bound, and allocation-heavy runs
//!   with known shapes
//! - **Timing + Summaries**: wall-clock sampling of repeated runs condensed
//!   into mean/median/stddev/percentiles
//!
//! ## Quick Start
//!
//! ```
//! use lento::prelude::*;
//!
//! assert_eq!(term(10).unwrap(), 55);
//! assert!(term(-1).is_err());
//! ```
//!
//! ## Injected advisories
//!
//! ```
//! use lento::{CaptureSink, Evaluator};
//!
//! let sink = CaptureSink::new();
//! let eval = Evaluator::with_sink(&sink);
//!
//! // Above the threshold: still correct, but advised against.
//! assert_eq!(eval.term_fast(41).unwrap(), 165_580_141);
//! assert_eq!(sink.len(), 1);
//! ```

// Re-export core types
pub use lento_core::{
    ADVISORY_THRESHOLD, AdvisorySink, CaptureSink, Evaluator, MAX_EXACT_INDEX, SequenceError,
    Stopwatch, Timed, TracingSink, sample_runs, term, term_fast, time,
};

// Re-export stats
pub use lento_stats::{RunSummary, summarize};

// Re-export workloads
pub use lento_workloads::{
    WorkloadDef, WorkloadKind, WorkloadScale, catalog, chattering_identity, combined_sums, find,
    layered_stall, sine_sum_parallel, sine_sum_serial, stalled_identity,
};

/// Run the Lento CLI harness.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() {
///     if let Err(e) = lento::run() {
///         eprintln!("Error: {e}");
///         std::process::exit(1);
///     }
/// }
/// ```
pub use lento_cli::run;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AdvisorySink, CaptureSink, Evaluator, RunSummary, SequenceError, Stopwatch, WorkloadScale,
        catalog, sample_runs, summarize, term, term_fast, time,
    };
}
