//! Configuration loading for the `escalate` binary.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions and loading
//! - [`defaults`]: serde defaults and the built-in reference scenario
//! - [`validation`]: checks run after parsing

mod defaults;
mod types;
mod validation;

pub use types::{Config, ConfigError, LogFormat, LoggingConfig, StageConfig};
pub use validation::{ValidationError, validate};
