// file: src/site/compose.rs
// version: 1.0.0
// guid: e4b8d1c6-7f20-4a93-9c5e-38a1f6b0d272

//! Docker Compose descriptor for a WordPress LEMP site

use super::{SiteName, NGINX_CONF_NAME};
use crate::config::ManagerConfig;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Compose file format version written into every descriptor
pub const COMPOSE_VERSION: &str = "3";

/// Service names, also used as container hostnames on the compose network
pub const DB_SERVICE: &str = "db";
pub const APP_SERVICE: &str = "wordpress";
pub const PROXY_SERVICE: &str = "nginx";

/// Port php-fpm listens on inside the application container
pub const FASTCGI_PORT: u16 = 9000;

const DB_VOLUME: &str = "db_data";
const DOCROOT_VOLUME: &str = "wordpress";
const DOCROOT: &str = "/var/www/html";

/// Root structure of a docker-compose.yml file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposeFile {
    pub version: String,
    pub services: BTreeMap<String, ComposeService>,
    #[serde(default)]
    pub volumes: BTreeMap<String, NamedVolume>,
}

/// A service in a docker-compose file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComposeService {
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
}

/// Named volume declaration; all defaults, so it serializes as `{}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedVolume {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
}

fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl ComposeFile {
    /// Build the three-service descriptor for `site`
    pub fn for_site(site: &SiteName, config: &ManagerConfig) -> Self {
        let db = &config.database;
        let content_mount = format!("./wp-content:{}/wp-content", DOCROOT);
        let docroot_mount = format!("{}:{}", DOCROOT_VOLUME, DOCROOT);

        let database = ComposeService {
            image: config.images.database.clone(),
            restart: Some("always".to_string()),
            environment: env(&[
                ("MYSQL_DATABASE", db.name.as_str()),
                ("MYSQL_USER", db.user.as_str()),
                ("MYSQL_PASSWORD", db.password.as_str()),
                ("MYSQL_RANDOM_ROOT_PASSWORD", "yes"),
            ]),
            volumes: vec![format!("{}:/var/lib/mysql", DB_VOLUME)],
            ..Default::default()
        };

        let application = ComposeService {
            image: config.images.application.clone(),
            depends_on: vec![DB_SERVICE.to_string()],
            restart: Some("always".to_string()),
            environment: env(&[
                ("WORDPRESS_DB_HOST", DB_SERVICE),
                ("WORDPRESS_DB_NAME", db.name.as_str()),
                ("WORDPRESS_DB_USER", db.user.as_str()),
                ("WORDPRESS_DB_PASSWORD", db.password.as_str()),
            ]),
            volumes: vec![docroot_mount.clone(), content_mount.clone()],
            ..Default::default()
        };

        // No depends_on: the proxy only shares the document root with the app
        let proxy = ComposeService {
            image: config.images.proxy.clone(),
            hostname: Some(site.to_string()),
            restart: Some("always".to_string()),
            ports: vec![format!("{}:80", config.http_port)],
            volumes: vec![
                format!("./{}:/etc/nginx/conf.d/default.conf:ro", NGINX_CONF_NAME),
                docroot_mount,
                content_mount,
            ],
            ..Default::default()
        };

        let services = BTreeMap::from([
            (DB_SERVICE.to_string(), database),
            (APP_SERVICE.to_string(), application),
            (PROXY_SERVICE.to_string(), proxy),
        ]);

        let volumes = BTreeMap::from([
            (DB_VOLUME.to_string(), NamedVolume::default()),
            (DOCROOT_VOLUME.to_string(), NamedVolume::default()),
        ]);

        Self {
            version: COMPOSE_VERSION.to_string(),
            services,
            volumes,
        }
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
