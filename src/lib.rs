//! wgkeygen — WireGuard key material generator (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod history;
pub mod keys;
pub mod logging;
pub mod netdev;
pub mod output;
