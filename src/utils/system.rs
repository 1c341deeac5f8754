// file: src/utils/system.rs
// version: 1.0.1
// guid: 58c1e9b4-0d7a-4f23-96e8-a2b5d3f0c741

//! System utility functions

use crate::config::ManagerConfig;
use crate::orchestrator::{ComposeCommand, ProcessRunner};
use crate::Result;
use tracing::{debug, info};

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Pick the compose invocation for lifecycle actions.
    ///
    /// Uses the same `--version` probe as [`Self::check_dependencies`]: a
    /// standalone binary that does not answer is replaced by the engine's
    /// `compose` plugin when that one does. When neither answers the configured
    /// command is kept, so the lifecycle call reports the failure itself.
    pub async fn resolve_compose_command(
        runner: &dyn ProcessRunner,
        config: &ManagerConfig,
    ) -> Result<ComposeCommand> {
        let compose = Self::configured_compose(config)?;
        if !compose.is_standalone() || Self::check_compose(runner, &compose).await.is_ok() {
            return Ok(compose);
        }

        let plugin = ComposeCommand::plugin(&config.engine_command);
        if Self::check_compose(runner, &plugin).await.is_ok() {
            info!("{} not usable, falling back to `{}`", compose, plugin);
            return Ok(plugin);
        }

        debug!("Neither {} nor `{}` answered, keeping {}", compose, plugin, compose);
        Ok(compose)
    }

    fn configured_compose(config: &ManagerConfig) -> Result<ComposeCommand> {
        ComposeCommand::parse(&config.compose_command)
            .ok_or_else(|| crate::error::SiteError::config("compose_command cannot be empty"))
    }

    async fn check_compose(runner: &dyn ProcessRunner, compose: &ComposeCommand) -> Result<()> {
        Self::check_tool(runner, "Docker Compose", compose.program(), &compose.args(&[])).await
    }

    /// Check that `<program> <args..> --version` runs and exits successfully
    pub async fn check_tool(
        runner: &dyn ProcessRunner,
        tool: &str,
        program: &str,
        base_args: &[String],
    ) -> Result<()> {
        let mut args = base_args.to_vec();
        args.push("--version".to_string());

        let outcome = runner
            .run(program, &args, None)
            .await
            .map_err(|e| crate::error::SiteError::missing_dependency(tool, e.to_string()))?;

        if !outcome.success() {
            let reason = match outcome.exit_code {
                Some(code) => format!("`{}` exited with code {}", outcome.command, code),
                None => format!("`{}` was terminated by a signal", outcome.command),
            };
            return Err(crate::error::SiteError::missing_dependency(tool, reason));
        }

        debug!("{} available: {}", tool, outcome.stdout.trim());
        Ok(())
    }

    /// Verify the container engine and compose orchestrator are usable.
    ///
    /// Returns the compose invocation to use from here on. When the standalone
    /// `docker-compose` binary is unusable, the engine's `compose` plugin is
    /// tried before giving up.
    pub async fn check_dependencies(
        runner: &dyn ProcessRunner,
        config: &ManagerConfig,
    ) -> Result<ComposeCommand> {
        Self::check_tool(runner, "Docker", &config.engine_command, &[]).await?;

        let compose = Self::configured_compose(config)?;
        let standalone = Self::check_compose(runner, &compose).await;

        match standalone {
            Ok(()) => Ok(compose),
            Err(err) if compose.is_standalone() => {
                let plugin = ComposeCommand::plugin(&config.engine_command);
                match Self::check_compose(runner, &plugin).await {
                    Ok(()) => {
                        info!("{} not usable, falling back to `{}`", compose, plugin);
                        Ok(plugin)
                    }
                    Err(_) => Err(err),
                }
            }
            Err(err) => Err(err),
        }
    }
}
