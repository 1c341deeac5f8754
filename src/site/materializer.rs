// file: src/site/materializer.rs
// version: 1.0.0
// guid: b7e25f09-3c8d-4a16-9f4b-d1a0e6c83527

//! Writes a site's directory and generated configuration files

use super::{nginx, ComposeFile, Site};
use crate::config::ManagerConfig;
use crate::Result;
use tokio::fs;
use tracing::{debug, info};

/// Creates site directories and writes their configuration
pub struct SiteMaterializer<'a> {
    config: &'a ManagerConfig,
}

impl<'a> SiteMaterializer<'a> {
    pub fn new(config: &'a ManagerConfig) -> Self {
        Self { config }
    }

    /// Ensure the site directory exists and (over)write both config files
    pub async fn materialize(&self, site: &Site) -> Result<()> {
        fs::create_dir_all(site.dir()).await.map_err(|e| {
            crate::error::SiteError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create site directory {}: {}", site.dir().display(), e),
            ))
        })?;
        debug!("Site directory ready: {}", site.dir().display());

        let compose = ComposeFile::for_site(site.name(), self.config).to_yaml()?;
        fs::write(site.compose_path(), compose).await?;
        debug!("Wrote {}", site.compose_path().display());

        fs::write(site.nginx_conf_path(), nginx::render(site.name())).await?;
        debug!("Wrote {}", site.nginx_conf_path().display());

        info!("Generated configuration for site '{}' in {}", site.name(), site.dir().display());
        Ok(())
    }
}
