// file: src/security/mod.rs
// version: 1.0.0
// guid: 71c3e8a4-2f6b-4d09-a5e7-b4d1c29f3e68

//! Input validation for untrusted user input

pub mod validation;

pub use validation::ValidationUtils;
