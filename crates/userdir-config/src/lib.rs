//! # Userdir Config
//!
//! Layered configuration loading for the userdir service: TOML files per
//! environment with environment-variable overrides.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::ConfigLoader;
