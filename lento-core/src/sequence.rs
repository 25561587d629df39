//! Bounded Recursive Sequence Evaluator
//!
//! Computes terms of the two-term linear recurrence (0, 1, 1, 2, 3, 5, ...).
//! Two gates run before any computation, in order:
//! 1. Validation: negative indices fail with [`SequenceError::NegativeIndex`].
//! 2. Advisory: indices above [`ADVISORY_THRESHOLD`] emit one advisory to the
//!    evaluator's sink, then the computation proceeds anyway.
//!
//! The canonical [`Evaluator::term`] is the unmemoized exponential recursion.
//! That cost profile is intentional — it is the canonical CPU-bound workload
//! for profiling practice. [`Evaluator::term_fast`] is the O(n) iterative
//! variant for callers that want the value rather than the burn.

use crate::advisory::{AdvisorySink, TracingSink};

/// Index above which naive evaluation is considered impractically slow.
///
/// Crossing it never prevents computation; it only triggers an advisory.
pub const ADVISORY_THRESHOLD: i64 = 40;

/// Largest index whose term fits in `u128`.
///
/// `term_fast` reports [`SequenceError::TermOverflow`] past this point.
pub const MAX_EXACT_INDEX: i64 = 186;

/// Errors from sequence evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// The requested index is negative. Raised before any computation.
    #[error("n must be >= 0, got {0}")]
    NegativeIndex(i64),
    /// The exact term does not fit in `u128` (index above [`MAX_EXACT_INDEX`]).
    /// Only reachable through the iterative variant; the naive recursion
    /// cannot arrive at such an index in any practical timeframe.
    #[error("term {0} does not fit in u128 (max exact index is {MAX_EXACT_INDEX})")]
    TermOverflow(i64),
}

/// Sequence evaluator with an injected advisory sink.
///
/// The evaluator is stateless apart from the sink: identical indices always
/// produce identical terms, and concurrent use needs no coordination.
///
/// # Examples
///
/// ```
/// use lento_core::Evaluator;
///
/// let eval = Evaluator::new();
/// assert_eq!(eval.term(10).unwrap(), 55);
/// assert!(eval.term(-1).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator<S: AdvisorySink = TracingSink> {
    sink: S,
}

impl Evaluator<TracingSink> {
    /// Evaluator with the default tracing-backed sink.
    pub fn new() -> Self {
        Self { sink: TracingSink }
    }
}

impl<S: AdvisorySink> Evaluator<S> {
    /// Evaluator that routes advisories to `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    /// Compute the n-th term by the unmemoized recursion.
    ///
    /// Exact for every valid index, exponentially slow past ~40 by design.
    pub fn term(&self, n: i64) -> Result<u128, SequenceError> {
        self.admit(n)?;
        Ok(naive(n as u64))
    }

    /// Compute the n-th term iteratively in O(n).
    ///
    /// Same gates and same values as [`Evaluator::term`]; additionally
    /// reports overflow for indices past [`MAX_EXACT_INDEX`].
    pub fn term_fast(&self, n: i64) -> Result<u128, SequenceError> {
        self.admit(n)?;
        iterative(n)
    }

    /// Validation gate, then advisory gate. Runs before any computation.
    fn admit(&self, n: i64) -> Result<(), SequenceError> {
        if n < 0 {
            return Err(SequenceError::NegativeIndex(n));
        }
        if n > ADVISORY_THRESHOLD {
            self.sink.advise(&format!(
                "n = {n} is past the practical threshold of {ADVISORY_THRESHOLD}; \
                 naive evaluation will be impractically slow"
            ));
        }
        Ok(())
    }
}

/// The recurrence itself. Callers have already validated `n >= 0`.
fn naive(n: u64) -> u128 {
    if n == 0 {
        return 0;
    }
    if n == 1 {
        return 1;
    }
    naive(n - 1) + naive(n - 2)
}

fn iterative(n: i64) -> Result<u128, SequenceError> {
    if n == 0 {
        return Ok(0);
    }
    let (mut prev, mut curr) = (0u128, 1u128);
    for _ in 2..=n {
        let next = prev
            .checked_add(curr)
            .ok_or(SequenceError::TermOverflow(n))?;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

/// Compute the n-th term with the default tracing-backed sink.
///
/// Convenience for callers that don't need sink injection.
pub fn term(n: i64) -> Result<u128, SequenceError> {
    Evaluator::new().term(n)
}

/// Iterative counterpart of [`term`].
pub fn term_fast(n: i64) -> Result<u128, SequenceError> {
    Evaluator::new().term_fast(n)
}
