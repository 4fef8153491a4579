//! Configuration for the `triat` CLI.
//!
//! A scaled-down `faxt::config::Config`: no home/system config-directory
//! search (that needs the `dirs` crate, which nothing else in this
//! workspace pulls in) — just an optional `triat.toml` in the current
//! directory, falling back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriatError};

pub const CONFIG_FILE_NAME: &str = "triat.toml";

/// Default cap on interpreter steps (spec.md §6 `execute`'s `max_steps`).
fn default_max_steps() -> usize {
    10_000
}

/// Default artifact output directory.
fn default_output_dir() -> String {
    ".".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Directory the `emit`/`compile`/`execute` subcommands write artifacts to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Default `max_steps` for `execute`, overridable with `--max-steps`.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            max_steps: default_max_steps(),
        }
    }
}

impl Config {
    /// Loads `./triat.toml` if present, otherwise the defaults.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| TriatError::Config(format!("invalid config: {e}")))
    }
}
