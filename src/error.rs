//! Unified error handling for the escalation pipeline.
//!
//! Assembly problems surface as [`BuildError`] when the chain is linked;
//! traversal problems surface as [`HandlerError`] from `Dispatcher::run`.
//! Nothing is recovered internally.

use crate::handlers::HandlerId;
use thiserror::Error;

// ============================================================================
// Build Errors (chain assembly)
// ============================================================================

/// Errors raised while assembling a chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("cannot build a chain from zero handlers")]
    EmptyChain,

    #[error("chain of {len} handlers exceeds the limit of {max}")]
    TooLong { len: usize, max: usize },

    #[error("no handler with id {0} in this chain")]
    UnknownHandler(HandlerId),

    #[error("handler '{stage}' already has a successor")]
    AlreadyLinked { stage: String },

    #[error("handler '{stage}' is already the successor of another handler")]
    AlreadyPreceded { stage: String },

    #[error("handler '{stage}' cannot link into the head of the chain")]
    LinkIntoHead { stage: String },

    #[error("linking '{from}' to '{to}' would create a cycle")]
    Cycle { from: String, to: String },
}

impl BuildError {
    /// Get a static error code string for statistics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyChain => "empty_chain",
            Self::TooLong { .. } => "too_long",
            Self::UnknownHandler(_) => "unknown_handler",
            Self::AlreadyLinked { .. } => "already_linked",
            Self::AlreadyPreceded { .. } => "already_preceded",
            Self::LinkIntoHead { .. } => "link_into_head",
            Self::Cycle { .. } => "cycle",
        }
    }
}

// ============================================================================
// Handler Errors (traversal)
// ============================================================================

/// Errors raised while a request travels through the chain.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A non-terminal handler had no successor when it tried to forward.
    #[error("handler '{stage}' has no successor to forward to")]
    BrokenChain { stage: String },

    #[error("failed to write stage event: {0}")]
    Sink(#[from] std::io::Error),
}

impl HandlerError {
    /// Get a static error code string for statistics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BrokenChain { .. } => "broken_chain",
            Self::Sink(_) => "sink_error",
        }
    }
}

/// Result type for handler processing.
pub type HandlerResult = Result<(), HandlerError>;
