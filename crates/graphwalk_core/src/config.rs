//! Walker configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Configuration for a [`GraphWalker`](crate::GraphWalker).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalkConfig {
    /// Whether `clear()` keeps the visited set.
    ///
    /// When true, a walk after `clear()` silently skips every node recorded
    /// before the clear.
    /// Default: false
    pub retain_visited_on_clear: bool,
}

impl WalkConfig {
    /// Creates a new `WalkConfig` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::invalid(e.to_string()))
    }

    /// Keeps or resets the visited set on `clear()`.
    pub fn retain_visited_on_clear(mut self, yes: bool) -> Self {
        self.retain_visited_on_clear = yes;
        self
    }
}
