//! escalate - run requests through an escalation chain and print each stage.
//!
//! Without arguments the built-in reference scenario runs. Pass a TOML file
//! to describe a different chain and request list.

use anyhow::Context;
use escalation_chain::config::{Config, LogFormat, LoggingConfig};
use escalation_chain::{Dispatcher, EventSink};
use std::io::Write;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Printed between two requests.
const SEPARATOR: &str = "===================";

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    match logging.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1);

    let config = match config_path.as_deref() {
        Some(path) => {
            Config::load(path).with_context(|| format!("failed to load config {path}"))?
        }
        None => Config::reference(),
    };

    init_tracing(&config.logging);
    info!(
        source = config_path.as_deref().unwrap_or("built-in reference"),
        stages = config.stages.len(),
        requests = config.requests.len(),
        "Starting escalate"
    );

    let chain = config.build_chain()?;
    let dispatcher = Dispatcher::new();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for (index, request) in config.requests.iter().enumerate() {
        if index > 0 {
            writeln!(out, "{SEPARATOR}")?;
        }
        let mut sink = EventSink::Direct(&mut out);
        if let Err(e) = dispatcher.run(chain.head(), request, &mut sink) {
            error!(request = %request.identifier(), error = %e, "Request failed");
            return Err(e.into());
        }
    }
    out.flush()?;

    let stats = dispatcher.stats();
    info!(runs = stats.runs, failed = stats.failed(), "Finished");
    Ok(())
}
