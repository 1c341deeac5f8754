// file: src/cli/args.rs
// version: 1.0.1
// guid: 6f1d8b3e-4c92-4a07-b8e5-d0a3c7f62e19

//! Command line argument definitions

use crate::config::ManagerConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wordpress-site-manager")]
#[command(about = "Manage WordPress sites with Docker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Name of the WordPress site; also its hostname and directory name
    pub site_name: String,

    /// Action to perform
    #[arg(value_enum)]
    pub action: Action,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(short, long, env = "WP_SITE_MANAGER_CONFIG", help = "Configuration file (YAML)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Directory that holds site directories")]
    pub sites_root: Option<PathBuf>,

    #[arg(long, help = "Do not open the site in a browser after create")]
    pub no_browser: bool,

    #[arg(long, help = "Do not add or remove hosts file entries")]
    pub skip_hosts: bool,
}

/// Site action
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Generate the site and register its hostname
    Create,
    /// Start the site's containers
    Enable,
    /// Stop the site's containers
    Disable,
    /// Stop the containers and remove the site
    Delete,
}

impl Action {
    /// Name as accepted on the command line
    pub fn name(&self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default()
    }
}

impl Cli {
    /// Apply command line overrides on top of loaded configuration
    pub fn apply_overrides(&self, config: &mut ManagerConfig) {
        if let Some(root) = &self.sites_root {
            config.sites_root = root.clone();
        }
        if self.no_browser {
            config.open_browser = false;
        }
        if self.skip_hosts {
            config.manage_hosts = false;
        }
    }
}
