// file: src/utils/mod.rs
// version: 1.0.0
// guid: 93b0f5d2-a6c8-4e17-8b3f-0c4d9e2a71b5

//! Utility modules for system operations

pub mod system;

pub use system::SystemUtils;
