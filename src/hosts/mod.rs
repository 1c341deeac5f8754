// file: src/hosts/mod.rs
// version: 1.0.1
// guid: 1c9e4a27-5d8f-4b63-a0e2-f6b3d7c18e40

//! Hosts file registration of site hostnames
//!
//! Every site resolves to the loopback address through a single
//! `127.0.0.1 <site>` line. The same code path serves all platforms; only the
//! file location and the privilege precondition differ (see [`platform`]).

pub mod platform;

use crate::site::SiteName;
use crate::Result;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Loopback address sites are mapped to
pub const LOOPBACK: &str = "127.0.0.1";

/// What a registration call did to the hosts file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEntryChange {
    Added,
    Removed(usize),
    Unchanged,
}

/// Capability to map a hostname to the loopback address
#[async_trait::async_trait]
pub trait HostRegistrar: Send + Sync {
    /// Append a loopback mapping for `site` unless one already exists
    async fn register(&self, site: &SiteName) -> Result<HostEntryChange>;

    /// Remove loopback mappings previously written for `site`
    async fn unregister(&self, site: &SiteName) -> Result<HostEntryChange>;
}

/// Hosts file at a fixed path
#[derive(Debug, Clone)]
pub struct HostsFile {
    path: PathBuf,
    system: bool,
}

impl HostsFile {
    /// The platform's system hosts file
    pub fn system() -> Result<Self> {
        Ok(Self {
            path: platform::system_hosts_path()?,
            system: true,
        })
    }

    /// A hosts file at an arbitrary location
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            system: false,
        }
    }

    /// Use `override_path` when given, the system hosts file otherwise
    pub fn resolve(override_path: Option<&Path>) -> Result<Self> {
        match override_path {
            Some(path) => Ok(Self::at(path)),
            None => Self::system(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn entry_line(site: &SiteName) -> String {
        format!("{} {}", LOOPBACK, site)
    }

    async fn read(&self) -> Result<String> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(self.map_io(e)),
        }
    }

    /// Fail early when the hosts file could not be rewritten.
    ///
    /// A missing file is fine; registration creates it.
    pub async fn ensure_writable(&self) -> Result<()> {
        self.check_access()?;
        match fs::OpenOptions::new().append(true).open(&self.path).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.map_io(e)),
        }
    }

    fn check_access(&self) -> Result<()> {
        if self.system {
            platform::ensure_can_edit_system_hosts()?;
        }
        Ok(())
    }

    fn map_io(&self, e: std::io::Error) -> crate::error::SiteError {
        if e.kind() == ErrorKind::PermissionDenied {
            crate::error::SiteError::permission(format!(
                "Cannot modify {}: re-run with elevated privileges or pass --skip-hosts",
                self.path.display()
            ))
        } else {
            crate::error::SiteError::Io(e)
        }
    }
}

/// Whether any active line of `content` maps `hostname` to the loopback address
pub fn has_loopback_mapping(content: &str, hostname: &str) -> bool {
    content.lines().any(|line| {
        let mut fields = strip_comment(line).split_whitespace();
        fields.next() == Some(LOOPBACK) && fields.any(|name| name.eq_ignore_ascii_case(hostname))
    })
}

/// Whether `line` is exactly a single-name loopback entry for `hostname`
fn is_own_entry(line: &str, hostname: &str) -> bool {
    let mut fields = strip_comment(line).split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(addr), Some(name), None) => addr == LOOPBACK && name.eq_ignore_ascii_case(hostname),
        _ => false,
    }
}

/// Line terminator used by `content`, `\n` unless it already uses CRLF
fn line_ending(content: &str) -> &'static str {
    if content.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or("")
}

#[async_trait::async_trait]
impl HostRegistrar for HostsFile {
    async fn register(&self, site: &SiteName) -> Result<HostEntryChange> {
        self.check_access()?;

        let content = self.read().await?;
        if has_loopback_mapping(&content, site.as_str()) {
            info!("Hosts entry for {} already present in {}", site, self.path.display());
            return Ok(HostEntryChange::Unchanged);
        }

        let eol = line_ending(&content);
        let mut line = String::new();
        if !content.is_empty() && !content.ends_with('\n') {
            line.push_str(eol);
        }
        line.push_str(&Self::entry_line(site));
        line.push_str(eol);

        debug!(
            "Appending '{}' to {} (elevated: {})",
            Self::entry_line(site),
            self.path.display(),
            platform::is_elevated()
        );

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.map_io(e))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| self.map_io(e))?;
        file.flush().await.map_err(|e| self.map_io(e))?;

        info!("Hosts entry added: {}", Self::entry_line(site));
        Ok(HostEntryChange::Added)
    }

    async fn unregister(&self, site: &SiteName) -> Result<HostEntryChange> {
        self.check_access()?;

        let content = self.read().await?;
        let total = content.lines().count();
        let kept: Vec<&str> = content
            .lines()
            .filter(|line| !is_own_entry(line, site.as_str()))
            .collect();
        let removed = total - kept.len();

        if removed == 0 {
            debug!("No hosts entry for {} in {}", site, self.path.display());
            return Ok(HostEntryChange::Unchanged);
        }

        let eol = line_ending(&content);
        let mut rewritten = kept.join(eol);
        if !rewritten.is_empty() {
            rewritten.push_str(eol);
        }

        // Rewrite in place; the hosts file is often a bind mount that cannot be replaced
        fs::write(&self.path, rewritten)
            .await
            .map_err(|e| self.map_io(e))?;

        info!("Removed {} hosts entr{} for {}", removed, if removed == 1 { "y" } else { "ies" }, site);
        Ok(HostEntryChange::Removed(removed))
    }
}
