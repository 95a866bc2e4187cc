//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout carries only generated key material.
//! `WGKEYGEN_LOG` takes an `EnvFilter` directive and wins over `-v`.

use tracing_subscriber::EnvFilter;

use crate::constants;
use crate::env::Env;

/// Filter directive for a `-v` count when `WGKEYGEN_LOG` is unset.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "wgkeygen=warn",
        1 => "wgkeygen=info",
        _ => "wgkeygen=debug",
    }
}

/// Build the filter from the environment, falling back to the verbosity.
pub fn filter(verbosity: u8, env: &Env) -> EnvFilter {
    env.var(constants::ENV_LOG)
        .and_then(|directive| match EnvFilter::try_new(&directive) {
            Ok(filter) => Some(filter),
            Err(e) => {
                eprintln!("Warning: ignoring invalid {} value: {e}", constants::ENV_LOG);
                None
            }
        })
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbosity)))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8, env: &Env) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity, env))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_directive(0), "wgkeygen=warn");
        assert_eq!(default_directive(1), "wgkeygen=info");
        assert_eq!(default_directive(5), "wgkeygen=debug");
    }

    #[test]
    fn env_directive_takes_priority() {
        let env = Env::mock([("WGKEYGEN_LOG", "wgkeygen=trace")]);
        assert_eq!(filter(0, &env).max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn falls_back_to_verbosity_without_env() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert_eq!(filter(2, &env).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn invalid_env_directive_falls_back() {
        let env = Env::mock([("WGKEYGEN_LOG", "wgkeygen=loud")]);
        assert_eq!(filter(0, &env).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn init_twice_does_not_panic() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        init(0, &env);
        init(1, &env);
    }
}
