//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and tunnel defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "wgkeygen";

/// Crate version, as reported by `wgkeygen version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple, exported by `build.rs`.
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.wgkeygen.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".wgkeygen.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "wgkeygen";

// ── Tunnel defaults ─────────────────────────────────────────────────

pub const DEFAULT_INTERFACE: &str = "wg0";
pub const DEFAULT_LISTEN_PORT: u16 = 51820;
pub const DEFAULT_ALLOWED_IPS: &str = "0.0.0.0/0";
pub const DEFAULT_KEEPALIVE: u16 = 25;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_INTERFACE: &str = "WGKEYGEN_INTERFACE";
pub const ENV_LISTEN_PORT: &str = "WGKEYGEN_LISTEN_PORT";
pub const ENV_ALLOWED_IPS: &str = "WGKEYGEN_ALLOWED_IPS";
pub const ENV_KEEPALIVE: &str = "WGKEYGEN_KEEPALIVE";
pub const ENV_FORMAT: &str = "WGKEYGEN_FORMAT";
pub const ENV_LOG: &str = "WGKEYGEN_LOG";
