//! Telemetry utilities for stage timing and traversal spans.

use std::time::Instant;

/// Guard for timing a single stage visit.
///
/// Logs the elapsed time at trace level when dropped, so the measurement
/// covers the stage and everything it forwarded to.
pub struct StageTimer<'a> {
    stage: &'a str,
    start: Instant,
}

impl<'a> StageTimer<'a> {
    /// Start timing a stage.
    pub fn new(stage: &'a str) -> Self {
        Self {
            stage,
            start: Instant::now(),
        }
    }
}

impl Drop for StageTimer<'_> {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        tracing::trace!(stage = %self.stage, duration, "stage finished");
    }
}

/// Standardized span constructors for pipeline observability.
pub mod spans {
    use crate::handlers::Role;
    use tracing::{Level, Span, debug_span, info_span};

    /// Create a span for one `Dispatcher::run` call.
    pub fn run(request: &str, priority: &str) -> Span {
        info_span!("chain.run", request = %request, priority = %priority)
    }

    /// Create a span for a single stage visit.
    ///
    /// Returns a disabled span without recording fields when debug spans are
    /// filtered out; one of these is held per nested stage frame.
    pub fn stage(name: &str, role: Role, position: usize) -> Span {
        if !tracing::enabled!(Level::DEBUG) {
            return Span::none();
        }
        debug_span!("chain.stage", stage = %name, role = role.as_str(), position = position)
    }
}
