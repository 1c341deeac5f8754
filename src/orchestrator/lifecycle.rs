// file: src/orchestrator/lifecycle.rs
// version: 1.0.0
// guid: d2f9a4e7-8b15-4c36-a0d8-6e3c1b7f59a2

//! Site lifecycle: bring containers up, down, or remove the site entirely
//!
//! The orchestrator owns all container state; nothing is persisted here.

use super::{CommandOutcome, ComposeCommand, ProcessRunner};
use crate::site::Site;
use crate::Result;
use std::io::ErrorKind;
use tracing::{debug, info, warn};

/// Result of deleting a site
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Directory removed; `containers_stopped` tells whether `down` succeeded
    Deleted { containers_stopped: bool },
    /// There was no site directory to delete
    NotFound,
}

/// Drives the compose orchestrator for one site at a time
pub struct LifecycleDriver<'a> {
    runner: &'a dyn ProcessRunner,
    compose: ComposeCommand,
}

impl<'a> LifecycleDriver<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, compose: ComposeCommand) -> Self {
        Self { runner, compose }
    }

    async fn run_compose(&self, site: &Site, subcommand: &[&str]) -> Result<CommandOutcome> {
        let args = self.compose.args(subcommand);
        self.runner
            .run(self.compose.program(), &args, Some(site.dir()))
            .await
    }

    fn require_existing(site: &Site) -> Result<()> {
        if site.exists() {
            Ok(())
        } else {
            Err(crate::error::SiteError::SiteNotFound(site.name().to_string()))
        }
    }

    /// Start the site's containers in the background
    pub async fn enable(&self, site: &Site) -> Result<CommandOutcome> {
        Self::require_existing(site)?;
        let outcome = self.run_compose(site, &["up", "-d"]).await?.into_result()?;
        info!("WordPress site '{}' is now enabled and running!", site.name());
        Ok(outcome)
    }

    /// Stop and remove the site's containers
    pub async fn disable(&self, site: &Site) -> Result<CommandOutcome> {
        Self::require_existing(site)?;
        let outcome = self.run_compose(site, &["down"]).await?.into_result()?;
        info!("WordPress site '{}' is now disabled and stopped!", site.name());
        Ok(outcome)
    }

    /// Stop the containers if possible, then remove the site directory
    pub async fn delete(&self, site: &Site) -> Result<DeleteOutcome> {
        if !site.exists() {
            info!("WordPress site '{}' does not exist.", site.name());
            return Ok(DeleteOutcome::NotFound);
        }

        let containers_stopped = match self.run_compose(site, &["down"]).await {
            Ok(outcome) if outcome.success() => {
                debug!("Containers for '{}' stopped", site.name());
                true
            }
            Ok(outcome) => {
                warn!(
                    "`{}` exited with {:?}, removing site anyway: {}",
                    outcome.command,
                    outcome.exit_code,
                    outcome.diagnostic()
                );
                false
            }
            Err(e) => {
                warn!("Could not stop containers for '{}', removing site anyway: {}", site.name(), e);
                false
            }
        };

        match tokio::fs::remove_dir_all(site.dir()).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("WordPress site '{}' does not exist.", site.name());
                return Ok(DeleteOutcome::NotFound);
            }
            Err(e) => return Err(e.into()),
        }

        info!("WordPress site '{}' is deleted successfully!", site.name());
        Ok(DeleteOutcome::Deleted { containers_stopped })
    }
}
