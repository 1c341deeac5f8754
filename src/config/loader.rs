// file: src/config/loader.rs
// version: 1.0.0
// guid: 9d1b6f3a-e842-4c7e-b0a5-6f2c8d4e1b97

//! Configuration file loading and environment variable substitution

use super::ManagerConfig;
use crate::Result;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name under the user config dir
const APP_DIR: &str = "wordpress-site-manager";

/// Default configuration file name
const CONFIG_FILE: &str = "config.yaml";

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new config loader seeded from the process environment
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Create a loader with an explicit variable set
    pub fn with_env_vars(env_vars: HashMap<String, String>) -> Self {
        Self { env_vars }
    }

    /// Default location of the configuration file, if a config dir exists
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// when present and built-in defaults otherwise.
    pub fn load(&self, explicit: Option<&Path>) -> Result<ManagerConfig> {
        match explicit {
            Some(path) => self.load_manager_config(path),
            None => match Self::default_config_path() {
                Some(path) if path.is_file() => self.load_manager_config(&path),
                _ => {
                    debug!("No configuration file found, using defaults");
                    Ok(ManagerConfig::default())
                }
            },
        }
    }

    /// Load manager configuration from a YAML file
    pub fn load_manager_config<P: AsRef<Path>>(&self, path: P) -> Result<ManagerConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            crate::error::SiteError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        debug!("Loading configuration from {}", path.as_ref().display());
        self.parse(&content)
    }

    /// Parse YAML configuration content after expanding `${VAR}` placeholders
    pub fn parse(&self, content: &str) -> Result<ManagerConfig> {
        let expanded = self.expand_env_vars(content)?;

        // An empty or comment-only file deserializes to null
        let config: ManagerConfig = if expanded.trim().is_empty() {
            ManagerConfig::default()
        } else {
            serde_yaml::from_str(&expanded)?
        };

        config.validate()?;
        Ok(config)
    }

    /// Expand environment variables in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            crate::error::SiteError::config(format!("Invalid regex pattern: {}", e))
        })?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else if !missing_vars.iter().any(|v| v == var_name) {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(crate::error::SiteError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}
