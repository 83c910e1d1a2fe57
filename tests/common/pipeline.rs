//! In-process pipeline helpers.

use escalation_chain::{
    Chain, Dispatcher, EventSink, Handler, HandlerResult, Request, link_in_order,
};

/// Voice Assistant -> Associate -> Manager.
#[allow(dead_code)]
pub fn reference_chain() -> Chain {
    link_in_order(vec![
        Handler::front_line("Voice Assistant"),
        Handler::escalation("Associate"),
        Handler::terminal("Manager"),
    ])
    .expect("reference chain is non-empty")
}

/// Run one request and return the result plus every emitted line.
#[allow(dead_code)]
pub fn run_lines(chain: &Chain, request: &Request) -> (HandlerResult, Vec<String>) {
    let mut events = Vec::new();
    let result = Dispatcher::new().run(
        chain.head(),
        request,
        &mut EventSink::Capturing(&mut events),
    );
    let lines = events.iter().map(ToString::to_string).collect();
    (result, lines)
}
