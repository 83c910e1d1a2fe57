//! Configuration validation.
//!
//! Validates configuration at load time so assembly problems show up before
//! any request runs.

use super::Config;
use crate::handlers::MAX_CHAIN_LEN;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("at least one [[stage]] is required")]
    NoStages,
    #[error("{0} stages configured, at most {max} are allowed", max = MAX_CHAIN_LEN)]
    TooManyStages(usize),
    #[error("stage #{0} has an empty name")]
    EmptyStageName(usize),
    #[error("at least one [[request]] is required")]
    NoRequests,
    #[error("request #{0} has an empty identifier")]
    EmptyIdentifier(usize),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.stages.is_empty() {
        errors.push(ValidationError::NoStages);
    }
    if config.stages.len() > MAX_CHAIN_LEN {
        errors.push(ValidationError::TooManyStages(config.stages.len()));
    }
    for (index, stage) in config.stages.iter().enumerate() {
        if stage.name.trim().is_empty() {
            errors.push(ValidationError::EmptyStageName(index));
        }
    }

    if config.requests.is_empty() {
        errors.push(ValidationError::NoRequests);
    }
    for (index, request) in config.requests.iter().enumerate() {
        if request.identifier().trim().is_empty() {
            errors.push(ValidationError::EmptyIdentifier(index));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
