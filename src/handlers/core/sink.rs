//! Event sink for routing stage events.
//!
//! Supports both direct writing to an output stream (the console, usually)
//! and capturing into a buffer for inspection after a run.

use crate::error::HandlerError;
use crate::request::Request;
use std::fmt;
use std::io::Write;

/// Announcement emitted by an escalation stage for high-priority requests.
pub const REDIRECT_NOTICE: &str = "Redirecting customer directly to manager";

/// One observable event per visited stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEvent {
    /// A stage served the request itself.
    Served { stage: String, request: String },
    /// An escalation stage announced a redirect instead of serving.
    Redirected,
}

impl StageEvent {
    pub fn served(stage: &str, request: &Request) -> Self {
        Self::Served {
            stage: stage.to_string(),
            request: request.identifier().to_string(),
        }
    }
}

impl fmt::Display for StageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Served { stage, request } => {
                write!(f, "[{stage}] Serving the customer: {request}")
            }
            Self::Redirected => f.write_str(REDIRECT_NOTICE),
        }
    }
}

/// Destination for stage events.
/// Direct writes one line per event; Capturing buffers events for later inspection.
pub enum EventSink<'a> {
    Direct(&'a mut dyn Write),
    Capturing(&'a mut Vec<StageEvent>),
}

impl EventSink<'_> {
    /// Write or buffer an event depending on sink mode.
    pub fn emit(&mut self, event: StageEvent) -> Result<(), HandlerError> {
        match self {
            Self::Direct(out) => {
                writeln!(out, "{event}")?;
                Ok(())
            }
            Self::Capturing(buf) => {
                buf.push(event);
                Ok(())
            }
        }
    }
}
