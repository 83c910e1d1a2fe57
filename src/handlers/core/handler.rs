//! Handler roles and the per-stage processing step.
//!
//! The set of roles is closed. A handler never stores a reference to the next
//! stage; the owning [`Chain`](super::chain::Chain) hands it a [`Next`] for the
//! duration of one `process` call.

use super::chain::{Chain, HandlerId};
use super::sink::{EventSink, StageEvent};
use crate::error::{HandlerError, HandlerResult};
use crate::request::Request;
use serde::Deserialize;
use std::fmt;
use tracing::debug;

/// Behaviour of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Serves every request, then always forwards.
    FrontLine,
    /// Serves normal requests; for high-priority requests it announces a
    /// redirect instead of serving. Forwards in both cases, so priority only
    /// changes what is announced, never where the request goes next.
    Escalation,
    /// Serves and stops. Never forwards, even if a successor is linked.
    Terminal,
}

impl Role {
    /// Static label for spans and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::FrontLine => "front_line",
            Role::Escalation => "escalation",
            Role::Terminal => "terminal",
        }
    }

    /// Whether this role hands the request on after acting.
    #[inline]
    pub const fn forwards(self) -> bool {
        !matches!(self, Role::Terminal)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stage of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    name: String,
    role: Role,
}

impl Handler {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    pub fn front_line(name: impl Into<String>) -> Self {
        Self::new(name, Role::FrontLine)
    }

    pub fn escalation(name: impl Into<String>) -> Self {
        Self::new(name, Role::Escalation)
    }

    pub fn terminal(name: impl Into<String>) -> Self {
        Self::new(name, Role::Terminal)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Act on the request, then forward through `next` when the role says so.
    pub fn process(
        &self,
        request: &Request,
        sink: &mut EventSink<'_>,
        next: Next<'_>,
    ) -> HandlerResult {
        match self.role {
            Role::FrontLine => {
                sink.emit(StageEvent::served(&self.name, request))?;
                next.forward(request, sink)
            }
            Role::Escalation => {
                if request.is_high_priority() {
                    debug!(
                        stage = %self.name,
                        request = %request.identifier(),
                        "redirecting high-priority request"
                    );
                    sink.emit(StageEvent::Redirected)?;
                } else {
                    sink.emit(StageEvent::served(&self.name, request))?;
                }
                next.forward(request, sink)
            }
            Role::Terminal => sink.emit(StageEvent::served(&self.name, request)),
        }
    }
}

/// Forwarding handle given to a handler while it processes a request.
pub struct Next<'a> {
    chain: &'a Chain,
    from: &'a Handler,
    successor: Option<HandlerId>,
}

impl<'a> Next<'a> {
    pub(crate) fn new(chain: &'a Chain, from: &'a Handler, successor: Option<HandlerId>) -> Self {
        Self {
            chain,
            from,
            successor,
        }
    }

    /// The linked successor, if any.
    #[inline]
    pub fn successor(&self) -> Option<HandlerId> {
        self.successor
    }

    /// Hand the request to the successor.
    ///
    /// Fails with [`HandlerError::BrokenChain`] when nothing is linked.
    pub fn forward(self, request: &Request, sink: &mut EventSink<'_>) -> HandlerResult {
        match self.successor {
            Some(id) => self.chain.process_at(id, request, sink),
            None => Err(HandlerError::BrokenChain {
                stage: self.from.name.clone(),
            }),
        }
    }
}
