//! Configuration loading and layering.
//!
//! Handles `.wgkeygen.toml` loading, environment variable resolution,
//! and the defaults the CLI falls back to when a flag is not given.

pub mod loader;

pub use loader::{
    Config, ConfigError, ConfigLayer, NetdevConfig, NetdevLayer, OutputConfig, OutputLayer,
};
