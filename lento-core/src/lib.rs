#![warn(missing_docs)]
//! Lento Core - Evaluator Runtime
//!
//! This crate provides the heart of Lento:
//! - The bounded recursive sequence evaluator (validated, advisory-emitting)
//! - The `AdvisorySink` capability for routing non-fatal advisories
//! - Wall-clock timing primitives for measuring workload runs

mod advisory;
mod sequence;
mod timing;

pub use advisory::{AdvisorySink, CaptureSink, TracingSink};
pub use sequence::{
    ADVISORY_THRESHOLD, Evaluator, MAX_EXACT_INDEX, SequenceError, term, term_fast,
};
pub use timing::{Stopwatch, Timed, sample_runs, time};
