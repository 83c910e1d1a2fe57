//! Test harness for the `escalate` binary.
//!
//! Writes the given config into a temporary directory and runs the compiled
//! binary against it.

use std::io::Write;
use std::process::{Command, Output};

/// Captured result of one binary invocation.
#[allow(dead_code)]
pub struct Escalate {
    pub output: Output,
}

#[allow(dead_code)]
impl Escalate {
    /// Run with the built-in reference scenario.
    pub fn reference() -> anyhow::Result<Self> {
        let output = Command::new(env!("CARGO_BIN_EXE_escalate"))
            .env("RUST_LOG", "off")
            .output()?;
        Ok(Self { output })
    }

    /// Run with `config` written to a temporary TOML file.
    pub fn with_config(config: &str) -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join("config.toml");
        std::fs::File::create(&config_path)?.write_all(config.as_bytes())?;

        let output = Command::new(env!("CARGO_BIN_EXE_escalate"))
            .arg(&config_path)
            .env("RUST_LOG", "off")
            .output()?;
        Ok(Self { output })
    }

    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn stdout_lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.output.stdout)
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }
}
