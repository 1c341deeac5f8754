// file: src/hosts/platform.rs
// version: 1.0.0
// guid: f3a17d58-9e6c-4b20-8d41-7c2e0b95a6f1

//! Platform-specific hosts file location and privilege checks

use crate::Result;
use regex::Regex;
use std::path::PathBuf;

/// Registry key holding the Windows TCP/IP parameters
#[cfg_attr(not(windows), allow(dead_code))]
const TCPIP_PARAMETERS: &str = r"SYSTEM\CurrentControlSet\Services\Tcpip\Parameters";

/// Locate the system hosts file
#[cfg(not(windows))]
pub fn system_hosts_path() -> Result<PathBuf> {
    Ok(PathBuf::from("/etc/hosts"))
}

/// Locate the system hosts file from the `DataBasePath` registry value
#[cfg(windows)]
pub fn system_hosts_path() -> Result<PathBuf> {
    use winreg::enums::HKEY_LOCAL_MACHINE;
    use winreg::RegKey;

    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    let key = hklm.open_subkey(TCPIP_PARAMETERS).map_err(|e| {
        crate::error::SiteError::registry(format!("Failed to open {}: {}", TCPIP_PARAMETERS, e))
    })?;
    let data_path: String = key.get_value("DataBasePath").map_err(|e| {
        crate::error::SiteError::registry(format!("Failed to read DataBasePath: {}", e))
    })?;

    let expanded = expand_windows_env(&data_path, |name| std::env::var(name).ok())?;
    Ok(PathBuf::from(expanded).join("hosts"))
}

/// Expand `%VAR%` references in a REG_EXPAND_SZ value
pub fn expand_windows_env<F>(value: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let re = Regex::new(r"%([^%]+)%").map_err(|e| {
        crate::error::SiteError::registry(format!("Invalid regex pattern: {}", e))
    })?;

    let mut missing = None;
    let expanded = re.replace_all(value, |caps: &regex::Captures| {
        lookup(&caps[1]).unwrap_or_else(|| {
            missing.get_or_insert_with(|| caps[1].to_string());
            caps[0].to_string()
        })
    });

    match missing {
        Some(name) => Err(crate::error::SiteError::registry(format!(
            "Environment variable {} referenced by DataBasePath is not set",
            name
        ))),
        None => Ok(expanded.into_owned()),
    }
}

/// Whether the process runs with administrative rights
pub fn is_elevated() -> bool {
    #[cfg(windows)]
    {
        // SAFETY: IsUserAnAdmin takes no arguments and only queries the process token.
        unsafe { windows::Win32::UI::Shell::IsUserAnAdmin().as_bool() }
    }
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is always safe to call.
        unsafe { libc::geteuid() == 0 }
    }
    #[cfg(not(any(unix, windows)))]
    {
        false
    }
}

/// Fail unless the platform lets this process edit the system hosts file.
///
/// Windows refuses the write outright without elevation, so the check is made
/// up front there. Elsewhere the write itself reports the permission problem.
pub fn ensure_can_edit_system_hosts() -> Result<()> {
    if cfg!(windows) && !is_elevated() {
        return Err(crate::error::SiteError::permission(
            "Administrator privileges are required to modify the hosts file",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_windows_env() {
        let lookup = |name: &str| match name {
            "SystemRoot" => Some(r"C:\Windows".to_string()),
            _ => None,
        };

        let expanded =
            expand_windows_env(r"%SystemRoot%\System32\drivers\etc", lookup).unwrap();
        assert_eq!(expanded, r"C:\Windows\System32\drivers\etc");

        let plain = expand_windows_env(r"D:\etc", lookup).unwrap();
        assert_eq!(plain, r"D:\etc");
    }

    #[test]
    fn test_expand_windows_env_missing_var() {
        let err = expand_windows_env(r"%Nope%\etc", |_| None).unwrap_err();
        assert!(matches!(err, crate::error::SiteError::Registry(_)));
        assert!(err.to_string().contains("Nope"));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_hosts_path_unix() {
        assert_eq!(system_hosts_path().unwrap(), PathBuf::from("/etc/hosts"));
        assert!(ensure_can_edit_system_hosts().is_ok());
    }
}
