// file: src/site/mod.rs
// version: 1.0.0
// guid: 2a6f0c84-d9e3-4b1a-87c5-e0b4f1d62a39

//! Site model and on-disk materialization
//!
//! A site is a directory named after the site holding a `docker-compose.yml`
//! and an `nginx.conf`.

pub mod compose;
pub mod materializer;
pub mod nginx;

pub use compose::ComposeFile;
pub use materializer::SiteMaterializer;

use crate::security::ValidationUtils;
use crate::Result;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Composition descriptor file name inside a site directory
pub const COMPOSE_FILE_NAME: &str = "docker-compose.yml";

/// Reverse proxy configuration file name inside a site directory
pub const NGINX_CONF_NAME: &str = "nginx.conf";

/// A site name that is safe to use as hostname, directory name and template value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteName(String);

impl SiteName {
    /// Validate and wrap a user-supplied site name
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        ValidationUtils::validate_site_name(&name)?;
        Ok(Self(name))
    }

    /// Get the site name as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SiteName {
    type Err = crate::error::SiteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for SiteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SiteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A site and its location on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    name: SiteName,
    dir: PathBuf,
}

impl Site {
    /// Locate a site under `sites_root`
    pub fn new(name: SiteName, sites_root: impl AsRef<Path>) -> Self {
        let dir = sites_root.as_ref().join(name.as_str());
        Self { name, dir }
    }

    pub fn name(&self) -> &SiteName {
        &self.name
    }

    /// Site directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the generated composition descriptor
    pub fn compose_path(&self) -> PathBuf {
        self.dir.join(COMPOSE_FILE_NAME)
    }

    /// Path of the generated nginx configuration
    pub fn nginx_conf_path(&self) -> PathBuf {
        self.dir.join(NGINX_CONF_NAME)
    }

    /// Whether the site directory exists
    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    /// URL the site is served on
    pub fn url(&self, http_port: u16) -> String {
        if http_port == 80 {
            format!("http://{}", self.name)
        } else {
            format!("http://{}:{}", self.name, http_port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_name_parse() {
        let name: SiteName = "foo".parse().unwrap();
        assert_eq!(name.as_str(), "foo");
        assert_eq!(name.to_string(), "foo");

        assert!("../foo".parse::<SiteName>().is_err());
        assert!("".parse::<SiteName>().is_err());
    }

    #[test]
    fn test_site_paths() {
        let site = Site::new(SiteName::new("blog").unwrap(), "/srv/sites");
        assert_eq!(site.dir(), Path::new("/srv/sites/blog"));
        assert_eq!(site.compose_path(), PathBuf::from("/srv/sites/blog/docker-compose.yml"));
        assert_eq!(site.nginx_conf_path(), PathBuf::from("/srv/sites/blog/nginx.conf"));
    }

    #[test]
    fn test_site_url() {
        let site = Site::new(SiteName::new("blog").unwrap(), ".");
        assert_eq!(site.url(80), "http://blog");
        assert_eq!(site.url(8080), "http://blog:8080");
    }
}
