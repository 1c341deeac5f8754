// file: src/lib.rs
// version: 1.0.0
// guid: 7a4c1e58-b3d9-4f60-8e27-c5f0a9d3b184

//! # WordPress Site Manager
//!
//! Provisions, starts, stops and removes local WordPress sites, each running
//! as a MySQL + php-fpm + nginx stack under Docker Compose.
//!
//! A site is a directory named after the site containing a generated
//! `docker-compose.yml` and `nginx.conf`, plus a `127.0.0.1 <site>` line in
//! the hosts file so the name resolves locally.

pub mod cli;
pub mod config;
pub mod error;
pub mod hosts;
pub mod logging;
pub mod orchestrator;
pub mod security;
pub mod site;
pub mod utils;

pub use error::{Result, SiteError};
