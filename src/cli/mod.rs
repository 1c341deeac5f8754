// file: src/cli/mod.rs
// version: 1.0.0
// guid: e2b6c9d1-7a30-4f85-9c4e-1d5f8a3b06e7

//! Command line interface for the WordPress site manager

pub mod args;
pub mod commands;

pub use args::{Action, Cli};
pub use commands::*;
