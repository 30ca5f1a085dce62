//! Scan configuration: root-directory resolution and validation.
//!
//! The scan root comes from the CLI (or the `LOOKUP_FOLDER` environment
//! variable via clap's env fallback). A missing, non-existent, or
//! non-directory root is a fatal configuration error; no scan is performed.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::duplicates::KeeperPolicy;

/// Configuration errors. All of them abort before any scanning.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// No scan directory was supplied at all.
    #[error(
        "no scan directory given\nPass a directory path, or set LOOKUP_FOLDER=/path/to/your/folder"
    )]
    MissingRoot,

    /// The supplied root does not exist.
    #[error("scan directory does not exist: {0}\nCheck the path or your LOOKUP_FOLDER value")]
    RootNotFound(PathBuf),

    /// The supplied root is not a directory.
    #[error("scan root is not a directory: {0}\nPoint dupescan at a directory, not a file")]
    RootNotADirectory(PathBuf),
}

/// Validated scan configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory to walk
    pub root: PathBuf,
    /// Keeper policy for name-duplicate groups
    pub policy: KeeperPolicy,
    /// Extension restriction for name grouping; empty means all files
    pub name_extensions: Vec<String>,
}

impl Config {
    /// Build and validate the configuration from parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the scan root is missing, does not
    /// exist, or is not a directory.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let root = cli.path.clone().ok_or(ConfigError::MissingRoot)?;

        if !root.exists() {
            return Err(ConfigError::RootNotFound(root));
        }
        if !root.is_dir() {
            return Err(ConfigError::RootNotADirectory(root));
        }

        Ok(Self {
            root,
            policy: cli.keeper_policy(),
            name_extensions: cli.name_extensions(),
        })
    }
}
