// file: src/config/mod.rs
// version: 1.0.0
// guid: c5a8e2f1-4b7d-4093-8e6a-1d3f9b72c0e5

//! Configuration module for the WordPress site manager
//!
//! Every field has a default so the tool runs without a configuration file.

pub mod loader;

pub use loader::ConfigLoader;

use crate::security::ValidationUtils;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level manager configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Directory that holds one subdirectory per site
    pub sites_root: PathBuf,
    /// Container engine executable
    pub engine_command: String,
    /// Compose orchestrator executable
    pub compose_command: String,
    /// Override for the platform hosts file location
    pub hosts_file: Option<PathBuf>,
    /// Open the site in the default browser after create
    pub open_browser: bool,
    /// Register and unregister hosts file entries
    pub manage_hosts: bool,
    /// Host port published by the nginx container
    pub http_port: u16,
    /// Container images for the three services
    pub images: ImageConfig,
    /// Database credentials shared by MySQL and WordPress
    pub database: DatabaseConfig,
}

/// Container images used in the composition file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub database: String,
    pub application: String,
    pub proxy: String,
}

/// Database credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub name: String,
    pub user: String,
    pub password: String,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            sites_root: PathBuf::from("."),
            engine_command: "docker".to_string(),
            compose_command: "docker-compose".to_string(),
            hosts_file: None,
            open_browser: true,
            manage_hosts: true,
            http_port: 80,
            images: ImageConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            database: "mysql:5.7".to_string(),
            application: "wordpress:fpm".to_string(),
            proxy: "nginx:latest".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: "wordpress".to_string(),
            user: "root".to_string(),
            password: "example".to_string(),
        }
    }
}

impl ManagerConfig {
    /// Validate configuration values before they reach any template
    pub fn validate(&self) -> Result<()> {
        if self.engine_command.trim().is_empty() {
            return Err(crate::error::SiteError::config(
                "engine_command cannot be empty",
            ));
        }

        if self.compose_command.trim().is_empty() {
            return Err(crate::error::SiteError::config(
                "compose_command cannot be empty",
            ));
        }

        if self.http_port == 0 {
            return Err(crate::error::SiteError::config(
                "http_port must be between 1 and 65535",
            ));
        }

        ValidationUtils::validate_image("images.database", &self.images.database)?;
        ValidationUtils::validate_image("images.application", &self.images.application)?;
        ValidationUtils::validate_image("images.proxy", &self.images.proxy)?;

        ValidationUtils::validate_template_value("database.name", &self.database.name)?;
        ValidationUtils::validate_template_value("database.user", &self.database.user)?;
        ValidationUtils::validate_template_value("database.password", &self.database.password)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ManagerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.compose_command, "docker-compose");
        assert_eq!(config.http_port, 80);
        assert_eq!(config.images.database, "mysql:5.7");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "http_port: 8080\ndatabase:\n  password: hunter2\n";
        let config: ManagerConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.http_port, 8080);
        assert_eq!(config.database.password, "hunter2");
        assert_eq!(config.database.user, "root");
        assert_eq!(config.images.proxy, "nginx:latest");
        assert!(config.open_browser);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ManagerConfig::default();
        config.http_port = 0;
        assert!(config.validate().is_err());

        let mut config = ManagerConfig::default();
        config.database.password = "pa ss".to_string();
        assert!(config.validate().is_err());

        let mut config = ManagerConfig::default();
        config.compose_command = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = ManagerConfig::default();
        config.images.proxy = "nginx;latest".to_string();
        assert!(config.validate().is_err());
    }
}
