//! The unit of work routed through a chain.

use serde::Deserialize;
use std::fmt;

/// Priority flag carried by a request. Fixed at creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Normal,
    High,
}

impl Priority {
    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, Priority::High)
    }

    /// Static label for spans and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

impl From<bool> for Priority {
    fn from(high: bool) -> Self {
        if high { Priority::High } else { Priority::Normal }
    }
}

/// A request routed through the pipeline.
///
/// Fields are private: handlers read a request but never mutate it, so the
/// routing decision made by each stage only depends on values set here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Request {
    identifier: String,
    #[serde(default)]
    priority: Priority,
}

impl Request {
    pub fn new(identifier: impl Into<String>, priority: Priority) -> Self {
        Self {
            identifier: identifier.into(),
            priority,
        }
    }

    /// Shorthand for a normal-priority request.
    pub fn normal(identifier: impl Into<String>) -> Self {
        Self::new(identifier, Priority::Normal)
    }

    /// Shorthand for a high-priority request.
    pub fn high(identifier: impl Into<String>) -> Self {
        Self::new(identifier, Priority::High)
    }

    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    #[inline]
    pub fn is_high_priority(&self) -> bool {
        self.priority.is_high()
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.identifier, self.priority.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_from_flag() {
        assert_eq!(Priority::from(true), Priority::High);
        assert_eq!(Priority::from(false), Priority::Normal);
        assert_eq!(Priority::default(), Priority::Normal);
    }

    #[test]
    fn test_request_accessors() {
        let bob = Request::normal("Bob");
        assert_eq!(bob.identifier(), "Bob");
        assert!(!bob.is_high_priority());

        let john = Request::high("John");
        assert_eq!(john.priority(), Priority::High);
        assert!(john.is_high_priority());
        assert_eq!(john.to_string(), "John (high)");
    }

    #[test]
    fn test_request_deserialize_defaults_to_normal() {
        let req: Request = toml::from_str(r#"identifier = "Alice""#).unwrap();
        assert_eq!(req, Request::normal("Alice"));

        let req: Request = toml::from_str(
            r#"
identifier = "Carol"
priority = "high"
"#,
        )
        .unwrap();
        assert_eq!(req, Request::high("Carol"));
    }
}
