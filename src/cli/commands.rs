// file: src/cli/commands.rs
// version: 1.0.1
// guid: c0e7a2f4-9b13-4d68-a5c1-3f8e6d0b9a27

//! Command implementations for the CLI

use super::args::{Action, Cli};
use crate::{
    config::{ConfigLoader, ManagerConfig},
    hosts::{HostRegistrar, HostsFile},
    logging::logger::with_site_span,
    orchestrator::{DeleteOutcome, LifecycleDriver, ProcessRunner},
    site::{Site, SiteMaterializer, SiteName},
    utils::system::SystemUtils,
    Result,
};
use tracing::{debug, info, warn};

/// Load configuration, apply flags and run the requested action
pub async fn run(cli: &Cli, runner: &dyn ProcessRunner) -> Result<()> {
    let mut config = ConfigLoader::new().load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    let name = &SiteName::new(cli.site_name.as_str())?;
    let config = &config;

    with_site_span(&cli.action.name(), name.as_str(), || async move {
        match cli.action {
            Action::Create => create_command(name, config, runner).await,
            Action::Enable => enable_command(name, config, runner).await,
            Action::Disable => disable_command(name, config, runner).await,
            Action::Delete => delete_command(name, config, runner).await,
        }
    })
    .await
}

fn hosts_registrar(config: &ManagerConfig) -> Result<Option<HostsFile>> {
    if !config.manage_hosts {
        return Ok(None);
    }
    HostsFile::resolve(config.hosts_file.as_deref()).map(Some)
}

/// Open `url` in the default browser
fn open_browser(url: &str) -> Result<()> {
    open::that(url).map_err(|e| crate::error::SiteError::Browser(format!("{}: {}", url, e)))
}

/// Check dependencies, generate the site and register its hostname
pub async fn create_command(
    name: &SiteName,
    config: &ManagerConfig,
    runner: &dyn ProcessRunner,
) -> Result<()> {
    let compose = SystemUtils::check_dependencies(runner, config).await?;

    let site = Site::new(name.clone(), &config.sites_root);
    SiteMaterializer::new(config).materialize(&site).await?;

    if let Some(hosts) = hosts_registrar(config)? {
        hosts.register(name).await?;
    }

    info!("WordPress site '{}' with a LEMP stack created successfully!", name);
    info!(
        "Start it with `{} up -d` in {} or the `enable` action",
        compose,
        site.dir().display()
    );

    if config.open_browser {
        info!("Opening the site in your default browser...");
        if let Err(e) = open_browser(&site.url(config.http_port)) {
            warn!("{}", e);
        }
    }

    Ok(())
}

/// Start a site's containers
pub async fn enable_command(
    name: &SiteName,
    config: &ManagerConfig,
    runner: &dyn ProcessRunner,
) -> Result<()> {
    let compose = SystemUtils::resolve_compose_command(runner, config).await?;
    let site = Site::new(name.clone(), &config.sites_root);
    LifecycleDriver::new(runner, compose).enable(&site).await?;
    Ok(())
}

/// Stop a site's containers
pub async fn disable_command(
    name: &SiteName,
    config: &ManagerConfig,
    runner: &dyn ProcessRunner,
) -> Result<()> {
    let compose = SystemUtils::resolve_compose_command(runner, config).await?;
    let site = Site::new(name.clone(), &config.sites_root);
    LifecycleDriver::new(runner, compose).disable(&site).await?;
    Ok(())
}

/// Stop a site's containers, remove its directory and its hosts entry.
///
/// The hosts file is checked before anything is removed. The entry is
/// removed even when the site directory is already gone.
pub async fn delete_command(
    name: &SiteName,
    config: &ManagerConfig,
    runner: &dyn ProcessRunner,
) -> Result<()> {
    let compose = SystemUtils::resolve_compose_command(runner, config).await?;
    let site = Site::new(name.clone(), &config.sites_root);

    let hosts = hosts_registrar(config)?;
    if let Some(hosts) = &hosts {
        hosts.ensure_writable().await?;
    }

    let outcome = LifecycleDriver::new(runner, compose).delete(&site).await?;
    if let DeleteOutcome::NotFound = outcome {
        debug!("Checking for a leftover hosts entry for '{}'", name);
    }

    if let Some(hosts) = &hosts {
        hosts.unregister(name).await?;
    }

    Ok(())
}
