//! Configuration for rosterdb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default roster file name, relative to the working directory
pub const DEFAULT_ROSTER_FILE: &str = "students.csv";

/// Main configuration for a roster instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// Path of the roster CSV file. The file is rewritten in full after
    /// every mutation; a sibling `.tmp` file is used for the atomic rename.
    pub roster_path: PathBuf,

    /// Persist automatically after every successful mutation. Disable for
    /// bulk loads where the caller wants a single explicit save at the end.
    pub save_on_mutate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_FILE),
            save_on_mutate: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the roster file path
    pub fn roster_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.roster_path = path.into();
        self
    }

    /// Set whether mutations persist immediately
    pub fn save_on_mutate(mut self, enabled: bool) -> Self {
        self.config.save_on_mutate = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
