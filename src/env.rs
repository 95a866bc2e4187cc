//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`], which reads the process
//! environment. Tests build an [`Env::mock()`] from explicit pairs so
//! config overrides can be exercised without touching global state.

use std::collections::HashMap;

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Read only from the given key-value pairs.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up a variable. Empty values count as unset.
    pub fn var(&self, name: &str) -> Option<String> {
        let value = match &self.overrides {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// Returns `true` if the variable is present and non-empty.
    pub fn is_set(&self, name: &str) -> bool {
        self.var(name).is_some()
    }

    /// Split a comma-separated variable into trimmed, non-empty items.
    pub fn list(&self, name: &str) -> Option<Vec<String>> {
        self.var(name).map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect()
        })
    }
}
