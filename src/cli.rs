//! Command-line interface definitions for dupescan.
//!
//! This module defines all CLI arguments and options using the clap derive API.
//!
//! # Example
//!
//! ```bash
//! # Scan a directory
//! dupescan ~/Downloads
//!
//! # Scan the directory named by $LOOKUP_FOLDER
//! LOOKUP_FOLDER=~/Downloads dupescan
//!
//! # Audio dedup: group .mp3/.m4a/.3gp by name, keep the smallest encode
//! dupescan ~/Music --audio
//!
//! # Verbose mode for debugging
//! dupescan -v ~/Downloads
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::duplicates::KeeperPolicy;

/// Extensions covered by the `--audio` preset.
pub const AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "m4a", "3gp"];

/// Duplicate file reporter.
///
/// dupescan walks a directory tree and reports duplicates two ways: by
/// filename stem and by content hash (SHA-256). For every duplicate it
/// prints an `rm` command for you to review; it never deletes anything
/// itself.
#[derive(Debug, Parser)]
#[command(name = "dupescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for duplicates
    ///
    /// Falls back to the LOOKUP_FOLDER environment variable when omitted.
    #[arg(value_name = "PATH", env = "LOOKUP_FOLDER")]
    pub path: Option<PathBuf>,

    /// Which file to keep in a name-duplicate group
    #[arg(long, value_enum, default_value = "largest", conflicts_with = "audio")]
    pub keep: KeepArg,

    /// Only consider these extensions for name grouping (repeatable)
    ///
    /// Matching is case-insensitive and without the leading dot, e.g.
    /// `--ext mp3 --ext m4a`. Content detection always covers all files.
    #[arg(long = "ext", value_name = "EXT", conflicts_with = "audio")]
    pub extensions: Vec<String>,

    /// Audio preset: restrict name grouping to mp3/m4a/3gp and keep the
    /// smallest file per group
    #[arg(long)]
    pub audio: bool,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors and the report
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Keeper policy argument for name-duplicate groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeepArg {
    /// Keep the largest file in each group
    Largest,
    /// Keep the smallest file in each group
    Smallest,
}

impl Cli {
    /// Resolve the effective keeper policy, honoring the audio preset.
    #[must_use]
    pub fn keeper_policy(&self) -> KeeperPolicy {
        if self.audio {
            return KeeperPolicy::SmallestWins;
        }
        match self.keep {
            KeepArg::Largest => KeeperPolicy::LargestWins,
            KeepArg::Smallest => KeeperPolicy::SmallestWins,
        }
    }

    /// Resolve the extension filter for name grouping, honoring the audio
    /// preset. Empty means no restriction.
    #[must_use]
    pub fn name_extensions(&self) -> Vec<String> {
        if self.audio {
            AUDIO_EXTENSIONS.iter().map(ToString::to_string).collect()
        } else {
            self.extensions.clone()
        }
    }
}
