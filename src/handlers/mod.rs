//! Request handlers.
//!
//! This module contains the handler roles, the chain that links them and the
//! dispatcher that starts a request at the head of a chain.

pub mod core;

pub use self::core::{
    Chain, DispatchStats, Dispatcher, EventSink, Handler, HandlerId, HandlerRef, MAX_CHAIN_LEN,
    Next, Path, REDIRECT_NOTICE, Role, StageEvent, link_in_order,
};
