// file: src/logging/mod.rs
// version: 1.0.0
// guid: 5b7d2e90-1c4a-4f6e-8a3b-c92d0e71f456

//! Logging system for the WordPress site manager

pub mod logger;

pub use logger::init_logger;
