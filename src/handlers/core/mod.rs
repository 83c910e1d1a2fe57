//! Core pipeline infrastructure.
//!
//! ## Pieces
//!
//! - [`Handler`] / [`Role`]: a stage and its closed set of behaviours
//!   (front line, escalation, terminal).
//! - [`Chain`]: owns the handlers and the successor links between them.
//!   [`link_in_order`] assembles the common case.
//! - [`Dispatcher`]: starts a run at the head and keeps counters.
//! - [`EventSink`]: where the one-line-per-stage events go.
//!
//! A run is a plain nested call sequence: each handler forwards by calling
//! into its successor, and the stack unwinds once a handler stops.

pub mod chain;
pub mod dispatcher;
pub mod handler;
pub mod sink;

pub use chain::{Chain, HandlerId, HandlerRef, MAX_CHAIN_LEN, Path, link_in_order};
pub use dispatcher::{DispatchStats, Dispatcher};
pub use handler::{Handler, Next, Role};
pub use sink::{EventSink, REDIRECT_NOTICE, StageEvent};
