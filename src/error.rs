// file: src/error.rs
// version: 1.0.0
// guid: 3f2a9c1e-6b4d-4e8a-9d17-52c0b8e4a1f3

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, SiteError>;

/// Error types for the WordPress site manager
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{tool} is not installed or not working ({reason}). Please install {tool} before running this tool.")]
    MissingDependency { tool: String, reason: String },

    #[error("Permission denied: {0}")]
    Permission(String),

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Command `{command}` failed with exit code {exit_code:?}: {stderr}")]
    Orchestrator {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to run `{command}`: {reason}")]
    Process { command: String, reason: String },

    #[error("Site '{0}' does not exist")]
    SiteNotFound(String),

    #[error("Browser error: {0}")]
    Browser(String),
}

impl SiteError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new permission error
    pub fn permission(msg: impl Into<String>) -> Self {
        Self::Permission(msg.into())
    }

    /// Create a new registry error
    pub fn registry(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }

    /// Create a new missing dependency error
    pub fn missing_dependency(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MissingDependency {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Create a new process spawn error
    pub fn process(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Process {
            command: command.into(),
            reason: reason.into(),
        }
    }
}
