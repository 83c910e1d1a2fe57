//! Chain assembly and traversal.
//!
//! A [`Chain`] owns every handler slot together with the link topology. Slot 0
//! is the head. Each slot has at most one successor and at most one
//! predecessor, the head has no predecessor, and links never form a cycle.
//!
//! Traversal nests one call per visited stage, so a chain holds at most
//! [`MAX_CHAIN_LEN`] handlers.

use super::handler::{Handler, Next};
use super::sink::EventSink;
use crate::error::{BuildError, HandlerResult};
use crate::request::Request;
use crate::telemetry::{StageTimer, spans};
use std::fmt;
use tracing::{debug, warn};

/// Upper bound on handlers per chain. Keeps the nested traversal well inside
/// a 2 MiB thread stack in unoptimized builds.
pub const MAX_CHAIN_LEN: usize = 256;

/// Position of a handler inside the chain that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(usize);

impl HandlerId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct Slot {
    handler: Handler,
    successor: Option<HandlerId>,
}

/// An ordered set of handlers plus the links between them.
#[derive(Debug)]
pub struct Chain {
    slots: Vec<Slot>,
}

impl Chain {
    const HEAD: HandlerId = HandlerId(0);

    /// Create a chain with every handler unlinked. The first handler is the head.
    ///
    /// Fails with [`BuildError::EmptyChain`] for zero handlers and with
    /// [`BuildError::TooLong`] past [`MAX_CHAIN_LEN`].
    pub fn new(handlers: Vec<Handler>) -> Result<Self, BuildError> {
        if handlers.is_empty() {
            return Err(BuildError::EmptyChain);
        }
        if handlers.len() > MAX_CHAIN_LEN {
            return Err(BuildError::TooLong {
                len: handlers.len(),
                max: MAX_CHAIN_LEN,
            });
        }
        let slots = handlers
            .into_iter()
            .map(|handler| Slot {
                handler,
                successor: None,
            })
            .collect();
        Ok(Self { slots })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: a chain cannot be built empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Ids of every slot, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = HandlerId> + use<> {
        (0..self.slots.len()).map(HandlerId)
    }

    pub fn handler(&self, id: HandlerId) -> Option<&Handler> {
        self.slots.get(id.0).map(|slot| &slot.handler)
    }

    pub fn successor(&self, id: HandlerId) -> Option<HandlerId> {
        self.slots.get(id.0).and_then(|slot| slot.successor)
    }

    /// Entry point of the chain.
    pub fn head(&self) -> HandlerRef<'_> {
        HandlerRef {
            chain: self,
            id: Self::HEAD,
        }
    }

    pub fn get(&self, id: HandlerId) -> Option<HandlerRef<'_>> {
        (id.0 < self.slots.len()).then_some(HandlerRef { chain: self, id })
    }

    /// Link `to` as the successor of `from`.
    ///
    /// Each handler can be linked exactly once. Linking into the head, into a
    /// handler that already has a predecessor, or back into the path that
    /// leads to `from` is rejected.
    pub fn link_successor(&mut self, from: HandlerId, to: HandlerId) -> Result<(), BuildError> {
        let from_slot = self.slots.get(from.0).ok_or(BuildError::UnknownHandler(from))?;
        let to_slot = self.slots.get(to.0).ok_or(BuildError::UnknownHandler(to))?;

        if from_slot.successor.is_some() {
            return Err(BuildError::AlreadyLinked {
                stage: from_slot.handler.name().to_string(),
            });
        }

        let cycle = || BuildError::Cycle {
            from: from_slot.handler.name().to_string(),
            to: to_slot.handler.name().to_string(),
        };
        if self.reaches(to, from) {
            return Err(cycle());
        }
        if to == Self::HEAD {
            return Err(BuildError::LinkIntoHead {
                stage: from_slot.handler.name().to_string(),
            });
        }
        if self.slots.iter().any(|slot| slot.successor == Some(to)) {
            return Err(BuildError::AlreadyPreceded {
                stage: to_slot.handler.name().to_string(),
            });
        }

        if !from_slot.handler.role().forwards() {
            warn!(
                stage = %from_slot.handler.name(),
                successor = %to_slot.handler.name(),
                "linking after a terminal handler; successor will never be reached"
            );
        }
        debug!(
            from = %from_slot.handler.name(),
            to = %to_slot.handler.name(),
            "linked handlers"
        );

        self.slots[from.0].successor = Some(to);
        Ok(())
    }

    /// Handlers on the linked path starting at the head, in traversal order.
    pub fn path(&self) -> Path<'_> {
        Path {
            chain: self,
            next: Some(Self::HEAD),
        }
    }

    /// Whether following successors from `start` arrives at `target`.
    fn reaches(&self, start: HandlerId, target: HandlerId) -> bool {
        let mut cursor = Some(start);
        while let Some(id) = cursor {
            if id == target {
                return true;
            }
            cursor = self.successor(id);
        }
        false
    }

    /// Run the handler in slot `id`. Ids reaching here come from this chain.
    pub(crate) fn process_at(
        &self,
        id: HandlerId,
        request: &Request,
        sink: &mut EventSink<'_>,
    ) -> HandlerResult {
        let slot = &self.slots[id.0];
        let handler = &slot.handler;

        let _span = spans::stage(handler.name(), handler.role(), id.0).entered();
        let _timer = StageTimer::new(handler.name());
        debug!(request = %request.identifier(), "stage visited");

        handler.process(request, sink, Next::new(self, handler, slot.successor))
    }
}

/// Borrowed handle to one handler of a chain.
#[derive(Clone, Copy)]
pub struct HandlerRef<'a> {
    chain: &'a Chain,
    id: HandlerId,
}

impl<'a> HandlerRef<'a> {
    #[inline]
    pub fn id(&self) -> HandlerId {
        self.id
    }

    pub fn handler(&self) -> &'a Handler {
        &self.chain.slots[self.id.0].handler
    }

    /// Process the request starting at this handler.
    pub fn process(&self, request: &Request, sink: &mut EventSink<'_>) -> HandlerResult {
        self.chain.process_at(self.id, request, sink)
    }
}

impl fmt::Debug for HandlerRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRef")
            .field("id", &self.id)
            .field("handler", self.handler())
            .finish()
    }
}

/// Iterator over the linked path of a chain.
pub struct Path<'a> {
    chain: &'a Chain,
    next: Option<HandlerId>,
}

impl<'a> Iterator for Path<'a> {
    type Item = &'a Handler;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.chain.successor(id);
        self.chain.handler(id)
    }
}

/// Build a chain linking each handler to the one after it.
///
/// The last handler is left without a successor. The returned chain's
/// [`head`](Chain::head) is the first handler.
pub fn link_in_order(handlers: Vec<Handler>) -> Result<Chain, BuildError> {
    let mut chain = Chain::new(handlers)?;
    for index in 1..chain.len() {
        chain.link_successor(HandlerId(index - 1), HandlerId(index))?;
    }
    Ok(chain)
}
