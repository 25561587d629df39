//! Advisory Sinks
//!
//! An advisory is a non-fatal notification about an input that is valid but
//! impractical. The evaluator never routes advisories through its return
//! value; it hands them to an injected `AdvisorySink` so that pure
//! computation stays testable without a global logging singleton.

use std::sync::{Mutex, PoisonError};

/// Capability to receive advisory messages.
///
/// Implementations must not block the caller materially; an advisory is
/// fire-and-forget from the evaluator's point of view.
pub trait AdvisorySink: Send + Sync {
    /// Accept one formatted advisory message.
    fn advise(&self, message: &str);
}

impl<S: AdvisorySink + ?Sized> AdvisorySink for &S {
    fn advise(&self, message: &str) {
        (**self).advise(message);
    }
}

/// Default production sink: forwards advisories to `tracing::warn!`.
///
/// How the message is displayed or filtered is owned by whoever installed
/// the subscriber (e.g. the CLI), not by the evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AdvisorySink for TracingSink {
    fn advise(&self, message: &str) {
        tracing::warn!(target: "lento::advisory", "{message}");
    }
}

/// Accumulating sink for tests and demos.
///
/// Collects every advisory it receives; `messages()` returns a snapshot.
#[derive(Debug, Default)]
pub struct CaptureSink {
    messages: Mutex<Vec<String>>,
}

impl CaptureSink {
    /// Create an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all advisories received so far, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of advisories received so far.
    pub fn len(&self) -> usize {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True if no advisory has been received.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AdvisorySink for CaptureSink {
    fn advise(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_sink_accumulates_in_order() {
        let sink = CaptureSink::new();
        sink.advise("first");
        sink.advise("second");

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_capture_sink_starts_empty() {
        let sink = CaptureSink::new();
        assert!(sink.is_empty());
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_sink_usable_by_reference() {
        let sink = CaptureSink::new();
        let by_ref: &dyn AdvisorySink = &&sink;
        by_ref.advise("via reference");

        assert_eq!(sink.messages(), vec!["via reference"]);
    }

    #[test]
    fn test_capture_sink_is_thread_safe() {
        let sink = std::sync::Arc::new(CaptureSink::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let sink = sink.clone();
                std::thread::spawn(move || sink.advise(&format!("thread {i}")))
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(sink.len(), 4);
    }
}
