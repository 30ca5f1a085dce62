//! dupescan - Duplicate File Reporter
//!
//! A CLI that scans a directory tree and reports duplicate files by two
//! independent criteria: identical filename stem and identical content
//! (SHA-256). For every duplicate it prints a shell `rm` command to review;
//! it never deletes anything itself.

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use cli::Cli;
use config::Config;
use duplicates::{
    extension_filter, find_content_duplicates, group_by_stem, select_name_keepers,
};
use error::ExitCode;
use output::{write_content_report, write_name_report};
use scanner::Walker;

/// Run the full scan pipeline and write the report to `writer`.
///
/// Returns the exit code: [`ExitCode::NoDuplicates`] when neither pass
/// found a duplicate-bearing group, [`ExitCode::Success`] otherwise.
///
/// # Errors
///
/// Returns an error only for fatal conditions: an invalid configuration or
/// a failure to write the report. Per-file problems are logged warnings.
pub fn run_scan<W: Write>(config: &Config, writer: &mut W) -> Result<ExitCode> {
    writeln!(writer, "Scanning for files in: {}", config.root.display())?;
    writeln!(writer)?;

    let (files, skipped) = Walker::new(&config.root).collect_files();
    if skipped > 0 {
        log::warn!("{} entries could not be read during the walk", skipped);
    }

    // Name pass: group by stem, resolve keepers by size.
    let predicate = extension_filter(&config.name_extensions);
    let predicate: Option<&dyn Fn(&Path) -> bool> = if config.name_extensions.is_empty() {
        None
    } else {
        Some(&predicate)
    };
    let grouped = group_by_stem(files.iter().map(|f| f.path.clone()), predicate);
    let name_groups = select_name_keepers(grouped, config.policy, |path| {
        std::fs::metadata(path).map(|m| m.len())
    });
    write_name_report(writer, &name_groups, config.policy)
        .context("failed to write name-duplicate report")?;

    // Content pass: digest every file, group by digest.
    let (content_groups, stats) = find_content_duplicates(files);
    write_content_report(writer, &content_groups)
        .context("failed to write content-duplicate report")?;

    let found_name_dupes = name_groups.iter().any(|g| !g.removable().is_empty());
    if found_name_dupes || stats.duplicate_groups > 0 {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::NoDuplicates)
    }
}

/// Application entry point: validate configuration and run the scan
/// against stdout.
///
/// # Errors
///
/// Returns an error for fatal configuration problems or report-write
/// failures.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let config = Config::from_cli(&cli)?;
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    run_scan(&config, &mut writer)
}
