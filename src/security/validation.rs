// file: src/security/validation.rs
// version: 1.0.0
// guid: 0e9f4b21-7d3c-4a58-b1e6-3c8a2f5d9074

//! Input validation utilities
//!
//! Site names end up as a directory name, a hostname in the hosts file and a
//! literal inside `docker-compose.yml` and `nginx.conf`, so they are held to
//! the strictest of the three grammars.

use crate::Result;

/// Maximum length of a full hostname
const MAX_HOSTNAME_LEN: usize = 253;

/// Maximum length of a single dot-separated label
const MAX_LABEL_LEN: usize = 63;

/// Names that already mean something in the hosts file
const RESERVED_NAMES: [&str; 3] = ["localhost", "broadcasthost", "ip6-localhost"];

/// Characters that would break out of a YAML scalar or an nginx directive
const TEMPLATE_FORBIDDEN: [char; 10] = ['"', '\'', ';', '{', '}', '#', '$', '`', '\\', ':'];

/// Lowercase alphanumeric label, hyphens allowed in the interior only
fn is_valid_label(label: &str) -> bool {
    label
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

/// Utility functions for input validation
pub struct ValidationUtils;

impl ValidationUtils {
    /// Validate a site name for use as hostname, directory name and template value
    pub fn validate_site_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(crate::error::SiteError::validation(
                "Site name cannot be empty",
            ));
        }

        if name.len() > MAX_HOSTNAME_LEN {
            return Err(crate::error::SiteError::validation(format!(
                "Site name cannot exceed {} characters",
                MAX_HOSTNAME_LEN
            )));
        }

        if RESERVED_NAMES.contains(&name) {
            return Err(crate::error::SiteError::validation(format!(
                "Site name '{}' is reserved",
                name
            )));
        }

        for label in name.split('.') {
            if label.is_empty() {
                return Err(crate::error::SiteError::validation(format!(
                    "Site name '{}' contains an empty label",
                    name
                )));
            }

            if label.len() > MAX_LABEL_LEN {
                return Err(crate::error::SiteError::validation(format!(
                    "Site name label '{}' exceeds {} characters",
                    label, MAX_LABEL_LEN
                )));
            }

            if !is_valid_label(label) {
                return Err(crate::error::SiteError::validation(format!(
                    "Site name '{}' may only contain lowercase letters, digits, hyphens and dots, and labels cannot start or end with a hyphen",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Validate a configuration value that is substituted into generated files
    pub fn validate_template_value(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(crate::error::SiteError::config(format!(
                "{} cannot be empty",
                field
            )));
        }

        if value.chars().any(char::is_whitespace) {
            return Err(crate::error::SiteError::config(format!(
                "{} cannot contain whitespace",
                field
            )));
        }

        if let Some(c) = value.chars().find(|c| TEMPLATE_FORBIDDEN.contains(c)) {
            return Err(crate::error::SiteError::config(format!(
                "{} contains forbidden character '{}'",
                field, c
            )));
        }

        Ok(())
    }

    /// Validate a container image reference (`[registry/]name[:tag][@digest]`)
    pub fn validate_image(field: &str, image: &str) -> Result<()> {
        if image.is_empty() {
            return Err(crate::error::SiteError::config(format!(
                "{} cannot be empty",
                field
            )));
        }

        let allowed = |c: char| c.is_ascii_alphanumeric() || "._-/:@".contains(c);
        if let Some(c) = image.chars().find(|c| !allowed(*c)) {
            return Err(crate::error::SiteError::config(format!(
                "{} contains forbidden character '{}'",
                field, c
            )));
        }

        Ok(())
    }
}
