// file: src/orchestrator/mod.rs
// version: 1.0.0
// guid: 4e7b0d93-c6a1-4f58-9e2d-b3a8f15c7d06

//! Container orchestrator invocation

pub mod lifecycle;
pub mod runner;

pub use lifecycle::{DeleteOutcome, LifecycleDriver};
pub use runner::{CommandOutcome, LocalRunner, ProcessRunner};

use std::fmt;

/// Standalone compose binary
pub const STANDALONE_COMPOSE: &str = "docker-compose";

/// How to invoke the compose orchestrator: a program plus leading arguments
///
/// `docker-compose` is a bare program; the plugin form is `docker` + `compose`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeCommand {
    program: String,
    base_args: Vec<String>,
}

impl ComposeCommand {
    /// Parse a whitespace-separated command such as `docker compose`
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            base_args: parts.collect(),
        })
    }

    /// The `compose` subcommand of a container engine
    pub fn plugin(engine: &str) -> Self {
        Self {
            program: engine.to_string(),
            base_args: vec!["compose".to_string()],
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Whether this is the standalone `docker-compose` binary
    pub fn is_standalone(&self) -> bool {
        self.program == STANDALONE_COMPOSE && self.base_args.is_empty()
    }

    /// Full argument list for a compose subcommand
    pub fn args(&self, extra: &[&str]) -> Vec<String> {
        self.base_args
            .iter()
            .cloned()
            .chain(extra.iter().map(|s| s.to_string()))
            .collect()
    }
}

impl fmt::Display for ComposeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&runner::command_line(&self.program, &self.base_args))
    }
}
