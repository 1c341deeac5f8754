// file: tests/integration_test.rs
// version: 1.0.1
// guid: 4d9a2b6e-1f73-4c05-b8e9-a6c3d0f57e12

//! Integration tests for the WordPress site manager

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;
use wordpress_site_manager::{
    cli::commands::{create_command, delete_command, disable_command, enable_command},
    config::ManagerConfig,
    orchestrator::{CommandOutcome, ProcessRunner},
    site::SiteName,
    Result, SiteError,
};

/// Answers every invocation with `exit_code` and records the command lines
struct ScriptedRunner {
    exit_code: i32,
    calls: Mutex<Vec<(String, Option<PathBuf>)>>,
}

impl ScriptedRunner {
    fn new(exit_code: i32) -> Self {
        Self {
            exit_code,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn commands(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(c, _)| c.clone()).collect()
    }
}

#[async_trait::async_trait]
impl ProcessRunner for ScriptedRunner {
    async fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> Result<CommandOutcome> {
        let command = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls
            .lock()
            .unwrap()
            .push((command.clone(), cwd.map(Path::to_path_buf)));

        // version probes always succeed so only lifecycle calls follow exit_code
        let exit_code = if command.ends_with("--version") { 0 } else { self.exit_code };
        Ok(CommandOutcome {
            command,
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: if exit_code == 0 { String::new() } else { "no configuration file provided".to_string() },
        })
    }
}

fn test_config(root: &Path) -> ManagerConfig {
    let hosts = root.join("hosts");
    std::fs::write(&hosts, "127.0.0.1 localhost\n").unwrap();

    let mut config = ManagerConfig::default();
    config.sites_root = root.join("sites");
    config.hosts_file = Some(hosts);
    config.open_browser = false;
    // keep the configured binary so no PATH-based fallback kicks in
    config.compose_command = "docker compose".to_string();
    config
}

fn hosts_content(config: &ManagerConfig) -> String {
    std::fs::read_to_string(config.hosts_file.as_ref().unwrap()).unwrap()
}

#[tokio::test]
async fn test_create_materializes_site_and_hosts_entry() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let runner = ScriptedRunner::new(0);
    let name = SiteName::new("foo")?;

    create_command(&name, &config, &runner).await?;

    let site_dir = config.sites_root.join("foo");
    let nginx = std::fs::read_to_string(site_dir.join("nginx.conf"))?;
    assert!(nginx.contains("server_name foo;"));
    assert!(nginx.contains("fastcgi_pass wordpress:9000;"));

    let compose = std::fs::read_to_string(site_dir.join("docker-compose.yml"))?;
    assert!(compose.contains("hostname: foo"));

    assert_eq!(std::fs::read_dir(&site_dir)?.count(), 2);
    assert_eq!(hosts_content(&config), "127.0.0.1 localhost\n127.0.0.1 foo\n");

    // only the dependency probes run during create
    assert_eq!(runner.commands(), vec!["docker --version", "docker compose --version"]);
    Ok(())
}

#[tokio::test]
async fn test_create_twice_keeps_one_hosts_entry() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let runner = ScriptedRunner::new(0);
    let name = SiteName::new("foo")?;

    create_command(&name, &config, &runner).await?;
    create_command(&name, &config, &runner).await?;

    assert_eq!(hosts_content(&config).matches("127.0.0.1 foo").count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_full_lifecycle() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let runner = ScriptedRunner::new(0);
    let name = SiteName::new("blog")?;

    create_command(&name, &config, &runner).await?;
    enable_command(&name, &config, &runner).await?;
    disable_command(&name, &config, &runner).await?;
    delete_command(&name, &config, &runner).await?;

    let commands = runner.commands();
    assert_eq!(
        &commands[2..],
        &["docker compose up -d", "docker compose down", "docker compose down"]
    );

    let site_dir = config.sites_root.join("blog");
    let cwds: Vec<Option<PathBuf>> = runner.calls.lock().unwrap()[2..].iter().map(|(_, c)| c.clone()).collect();
    assert!(cwds.iter().all(|c| c.as_deref() == Some(site_dir.as_path())));

    assert!(!site_dir.exists());
    assert_eq!(hosts_content(&config), "127.0.0.1 localhost\n");

    // enabling a deleted site fails instead of reporting success
    let err = enable_command(&name, &config, &runner).await.unwrap_err();
    assert!(matches!(err, SiteError::SiteNotFound(_)));
    Ok(())
}

#[tokio::test]
async fn test_enable_surfaces_orchestrator_failure() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let name = SiteName::new("foo")?;

    create_command(&name, &config, &ScriptedRunner::new(0)).await?;
    std::fs::remove_file(config.sites_root.join("foo").join("docker-compose.yml"))?;

    let err = enable_command(&name, &config, &ScriptedRunner::new(1))
        .await
        .unwrap_err();
    match err {
        SiteError::Orchestrator { exit_code, stderr, .. } => {
            assert_eq!(exit_code, Some(1));
            assert!(stderr.contains("no configuration file"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_delete_missing_site_is_ok() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let runner = ScriptedRunner::new(0);

    delete_command(&SiteName::new("ghost")?, &config, &runner).await?;

    assert!(runner.commands().is_empty());
    assert_eq!(hosts_content(&config), "127.0.0.1 localhost\n");
    Ok(())
}

#[tokio::test]
async fn test_delete_keeps_site_when_hosts_file_unwritable() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let runner = ScriptedRunner::new(0);
    let name = SiteName::new("foo")?;

    create_command(&name, &config, &runner).await?;

    let mut broken = config.clone();
    let hosts_dir = temp_dir.path().join("hosts.d");
    std::fs::create_dir(&hosts_dir)?;
    broken.hosts_file = Some(hosts_dir);

    assert!(delete_command(&name, &broken, &runner).await.is_err());
    assert!(config.sites_root.join("foo").is_dir());

    delete_command(&name, &config, &runner).await?;

    assert!(!config.sites_root.join("foo").exists());
    assert!(!hosts_content(&config).contains("127.0.0.1 foo"));
    Ok(())
}

#[tokio::test]
async fn test_delete_removes_leftover_hosts_entry() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let runner = ScriptedRunner::new(0);
    let name = SiteName::new("foo")?;

    create_command(&name, &config, &runner).await?;
    std::fs::remove_dir_all(config.sites_root.join("foo"))?;

    delete_command(&name, &config, &runner).await?;

    assert_eq!(hosts_content(&config), "127.0.0.1 localhost\n");
    Ok(())
}

#[tokio::test]
async fn test_skip_hosts_leaves_file_untouched() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let mut config = test_config(temp_dir.path());
    config.manage_hosts = false;
    let name = SiteName::new("foo")?;

    create_command(&name, &config, &ScriptedRunner::new(0)).await?;

    assert_eq!(hosts_content(&config), "127.0.0.1 localhost\n");
    Ok(())
}

mod binary {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn cmd(temp_dir: &TempDir) -> Command {
        let config = temp_dir.path().join("config.yaml");
        std::fs::write(&config, "").unwrap();

        let mut cmd = Command::cargo_bin("wordpress-site-manager").unwrap();
        cmd.arg("--config")
            .arg(config)
            .arg("--sites-root")
            .arg(temp_dir.path())
            .arg("--skip-hosts")
            .arg("--no-browser");
        cmd
    }

    #[test]
    fn test_rejects_unsafe_site_name() {
        let temp_dir = TempDir::new().unwrap();
        cmd(&temp_dir)
            .args(["../evil", "create"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("Validation error"));
        assert!(!temp_dir.path().join("../evil").exists());
    }

    #[test]
    fn test_rejects_unknown_action() {
        let temp_dir = TempDir::new().unwrap();
        cmd(&temp_dir)
            .args(["foo", "restart"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }

    #[test]
    fn test_delete_missing_site_reports_absence() {
        let temp_dir = TempDir::new().unwrap();
        cmd(&temp_dir)
            .args(["ghost", "delete"])
            .assert()
            .success()
            .stdout(predicate::str::contains("does not exist"));
    }

    #[test]
    fn test_enable_missing_site_fails() {
        let temp_dir = TempDir::new().unwrap();
        cmd(&temp_dir)
            .args(["ghost", "enable"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("Site 'ghost' does not exist"));
    }
}
