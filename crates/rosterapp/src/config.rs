//! # Configuration
//!
//! Roster configuration is managed by [`confique`], which handles layered loading
//! from a TOML file, environment variables, and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `ROSTER_PAGE_SIZE`, `ROSTER_DATA_DIR`, `ROSTER_LOG_LEVEL`.
//! 2. **Config file**: `roster.toml` in the OS-appropriate config directory
//!    (via the `directories` crate).
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page_size` | `10` | Rows per page when listing |
//! | `data_dir` | platform data dir | Directory holding `roster-state.json` |
//! | `log_level` | `warn` | Log level for the CLI |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "roster.toml";

/// Configuration for roster, stored in `roster.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Rows per page when listing records.
    #[config(env = "ROSTER_PAGE_SIZE", default = 10)]
    pub page_size: usize,

    /// Where the snapshot is kept. When absent, the platform data directory.
    #[config(env = "ROSTER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[config(env = "ROSTER_LOG_LEVEL", default = "warn")]
    pub log_level: String,
}

impl RosterConfig {
    /// Loads from the environment, then `config_file` (if given and present),
    /// then defaults.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = RosterConfig::builder().env();
        if let Some(path) = config_file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// Loads using the platform config file location.
    pub fn load_default() -> Result<Self> {
        Self::load(default_config_file().as_deref())
    }

    /// Page size, never zero.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// The configured data directory, else the platform one. `None` means no
    /// persistent storage is available.
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(default_data_dir)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "roster")
}

pub fn default_data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn default_config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
