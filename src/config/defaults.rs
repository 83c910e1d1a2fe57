//! Default value functions for configuration.

use super::types::StageConfig;
use crate::handlers::Role;
use crate::request::Request;

pub fn default_log_filter() -> String {
    "info".to_string()
}

// =============================================================================
// Reference Scenario
// =============================================================================

pub fn reference_stages() -> Vec<StageConfig> {
    vec![
        StageConfig::new("Voice Assistant", Role::FrontLine),
        StageConfig::new("Associate", Role::Escalation),
        StageConfig::new("Manager", Role::Terminal),
    ]
}

pub fn reference_requests() -> Vec<Request> {
    vec![Request::normal("Bob"), Request::high("John")]
}
