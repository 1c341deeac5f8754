// file: src/orchestrator/runner.rs
// version: 1.0.0
// guid: a8d3f6c1-2e94-4b7a-b5c0-9f1e4d27a683

//! Subprocess execution with captured output

use crate::Result;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// Captured result of one finished subprocess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Command line as it was run, for diagnostics
    pub command: String,
    /// Exit code, `None` when terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Most useful diagnostic text: stderr, falling back to stdout
    pub fn diagnostic(&self) -> &str {
        if self.stderr.trim().is_empty() {
            self.stdout.trim()
        } else {
            self.stderr.trim()
        }
    }

    /// Turn a non-zero exit into an orchestrator error
    pub fn into_result(self) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(crate::error::SiteError::Orchestrator {
                exit_code: self.exit_code,
                stderr: self.diagnostic().to_string(),
                command: self.command,
            })
        }
    }
}

/// Render a program and its arguments as a single command line
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trait for running external programs
#[async_trait::async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `program` to completion.
    ///
    /// A non-zero exit is reported through [`CommandOutcome`]; only a failure
    /// to start the program is an `Err`.
    async fn run(&self, program: &str, args: &[String], cwd: Option<&Path>)
        -> Result<CommandOutcome>;
}

/// Runs programs on the local machine
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalRunner;

impl LocalRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ProcessRunner for LocalRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: Option<&Path>,
    ) -> Result<CommandOutcome> {
        let command = command_line(program, args);

        let binary = which::which(program).map_err(|_| {
            crate::error::SiteError::process(&command, format!("{} not found in PATH", program))
        })?;

        debug!("Executing: {} (cwd: {:?})", command, cwd);

        let mut cmd = Command::new(binary);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .await
            .map_err(|e| crate::error::SiteError::process(&command, e.to_string()))?;

        let outcome = CommandOutcome {
            command,
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        debug!("`{}` exited with {:?}", outcome.command, outcome.exit_code);
        if !outcome.stdout.trim().is_empty() {
            debug!("STDOUT: {}", outcome.stdout.trim());
        }
        if !outcome.stderr.trim().is_empty() {
            debug!("STDERR: {}", outcome.stderr.trim());
        }

        Ok(outcome)
    }
}
