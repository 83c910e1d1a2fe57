//! # escalation-chain
//!
//! A synchronous request escalation pipeline. A [`Request`] is routed through
//! an ordered [`Chain`] of handlers; each handler emits one event, then either
//! forwards to its successor or ends the run.
//!
//! ## Quick Start
//!
//! ```rust
//! use escalation_chain::{Dispatcher, EventSink, Handler, Request, link_in_order};
//!
//! let chain = link_in_order(vec![
//!     Handler::front_line("Voice Assistant"),
//!     Handler::escalation("Associate"),
//!     Handler::terminal("Manager"),
//! ])
//! .expect("non-empty chain");
//!
//! let mut events = Vec::new();
//! Dispatcher::new()
//!     .run(chain.head(), &Request::high("John"), &mut EventSink::Capturing(&mut events))
//!     .expect("chain ends in a terminal handler");
//!
//! let lines: Vec<String> = events.iter().map(ToString::to_string).collect();
//! assert_eq!(
//!     lines,
//!     [
//!         "[Voice Assistant] Serving the customer: John",
//!         "Redirecting customer directly to manager",
//!         "[Manager] Serving the customer: John",
//!     ]
//! );
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod request;
pub mod telemetry;

pub use error::{BuildError, HandlerError, HandlerResult};
pub use handlers::{
    Chain, DispatchStats, Dispatcher, EventSink, Handler, HandlerId, HandlerRef, MAX_CHAIN_LEN,
    Role, StageEvent, link_in_order,
};
pub use request::{Priority, Request};
