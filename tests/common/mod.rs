//! Integration test common infrastructure.
//!
//! Provides helpers for building chains, capturing stage events, and running
//! the `escalate` binary against a temporary config.

pub mod binary;
pub mod pipeline;

#[allow(unused_imports)]
pub use binary::Escalate;
#[allow(unused_imports)]
pub use pipeline::{reference_chain, run_lines};
