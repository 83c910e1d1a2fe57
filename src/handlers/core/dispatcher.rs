//! Pipeline entry point and run statistics.

use super::chain::HandlerRef;
use super::sink::EventSink;
use crate::error::HandlerResult;
use crate::request::Request;
use crate::telemetry::spans;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Starts traversal at a chain's head and keeps usage counters.
#[derive(Debug, Default)]
pub struct Dispatcher {
    runs: AtomicU64,
    /// Failure counts keyed by `HandlerError::error_code`.
    failures: Mutex<HashMap<&'static str, u64>>,
}

/// Snapshot of dispatcher counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchStats {
    pub runs: u64,
    /// Failure codes sorted by count, most frequent first.
    pub failures: Vec<(&'static str, u64)>,
}

impl DispatchStats {
    pub fn failed(&self) -> u64 {
        self.failures.iter().map(|(_, n)| n).sum()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a request through the chain starting at `head`.
    ///
    /// Returns once every forwarded call has unwound. Any handler error is
    /// returned unchanged; events emitted before the failure stay in the sink.
    pub fn run(
        &self,
        head: HandlerRef<'_>,
        request: &Request,
        sink: &mut EventSink<'_>,
    ) -> HandlerResult {
        self.runs.fetch_add(1, Ordering::Relaxed);

        let _span = spans::run(request.identifier(), request.priority().as_str()).entered();
        debug!(head = %head.handler().name(), "dispatching request");

        let result = head.process(request, sink);

        if let Err(ref e) = result {
            *self.failures.lock().entry(e.error_code()).or_insert(0) += 1;
            warn!(error = %e, code = e.error_code(), "pipeline run failed");
        }

        result
    }

    /// Get run statistics.
    pub fn stats(&self) -> DispatchStats {
        let mut failures: Vec<_> = self
            .failures
            .lock()
            .iter()
            .map(|(code, count)| (*code, *count))
            .collect();
        failures.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

        DispatchStats {
            runs: self.runs.load(Ordering::Relaxed),
            failures,
        }
    }
}
