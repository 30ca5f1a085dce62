//! Content-duplicate detection.
//!
//! # Overview
//!
//! Detection runs in two phases:
//!
//! 1. **Size grouping**: files are bucketed by exact byte size. Files with
//!    distinct sizes cannot be content-identical, so singleton buckets are
//!    dropped without any I/O. This is a pure optimization; grouping
//!    results are identical to hashing every file.
//! 2. **Full hash**: every remaining file is streamed through SHA-256 and
//!    grouped by digest. Only digest groups with two or more members are
//!    returned.
//!
//! Files that cannot be read contribute no digest and are absent from all
//! groups; each failure is logged as a warning and counted in
//! [`ContentStats`], never aborting the scan.
//!
//! Hashing is sequential; group membership is aggregated only after all
//! digests are known, so results never depend on enumeration order.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::scanner::Walker;
//! use dupescan::duplicates::find_content_duplicates;
//! use std::path::Path;
//!
//! let (files, _) = Walker::new(Path::new(".")).collect_files();
//! let (groups, stats) = find_content_duplicates(files);
//!
//! println!(
//!     "{} duplicate groups, {} files hashed",
//!     groups.len(),
//!     stats.hashed_files
//! );
//! ```

use std::collections::HashMap;

use crate::scanner::{hash_file, Digest, FileEntry};

use super::groups::DuplicateGroup;

/// Statistics from content-duplicate detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStats {
    /// Total files that entered detection
    pub total_files: usize,
    /// Files eliminated by the size pre-filter (unique size, never hashed)
    pub eliminated_by_size: usize,
    /// Files successfully hashed
    pub hashed_files: usize,
    /// Files that failed to hash (open or read error)
    pub failed_files: usize,
    /// Digest groups with 2+ members
    pub duplicate_groups: usize,
    /// Files that are duplicates (group members beyond the keeper)
    pub duplicate_files: usize,
    /// Bytes reclaimable by removing every duplicate
    pub reclaimable_space: u64,
}

/// Group files by exact byte size, dropping singleton buckets.
///
/// Returns the surviving buckets and the number of files eliminated as
/// size-unique.
#[must_use]
pub fn group_by_size(files: Vec<FileEntry>) -> (HashMap<u64, Vec<FileEntry>>, usize) {
    let mut buckets: HashMap<u64, Vec<FileEntry>> = HashMap::new();
    for file in files {
        buckets.entry(file.size).or_default().push(file);
    }

    let mut eliminated = 0usize;
    buckets.retain(|size, members| {
        if members.len() > 1 {
            log::debug!("Size bucket {} bytes: {} candidates", size, members.len());
            true
        } else {
            eliminated += 1;
            false
        }
    });

    (buckets, eliminated)
}

/// Find groups of files with byte-identical content.
///
/// Returns only duplicate-bearing groups (two or more members). Within each
/// group the members are sorted lexicographically and the first path is the
/// keeper; groups themselves are ordered by keeper path, so two runs over an
/// unchanged tree produce identical output.
#[must_use]
pub fn find_content_duplicates(files: Vec<FileEntry>) -> (Vec<DuplicateGroup>, ContentStats) {
    let mut stats = ContentStats {
        total_files: files.len(),
        ..Default::default()
    };

    let (buckets, eliminated) = group_by_size(files);
    stats.eliminated_by_size = eliminated;

    let mut by_digest: HashMap<Digest, (u64, Vec<std::path::PathBuf>)> = HashMap::new();

    for (size, members) in buckets {
        for file in members {
            match hash_file(&file.path) {
                Ok(digest) => {
                    stats.hashed_files += 1;
                    by_digest
                        .entry(digest)
                        .or_insert_with(|| (size, Vec::new()))
                        .1
                        .push(file.path);
                }
                Err(e) => {
                    stats.failed_files += 1;
                    log::warn!("Could not read file to hash: {}", e);
                }
            }
        }
    }

    let mut groups: Vec<DuplicateGroup> = by_digest
        .into_iter()
        .filter(|(_, (_, paths))| paths.len() > 1)
        .map(|(digest, (size, paths))| DuplicateGroup::new(digest, size, paths))
        .collect();

    groups.sort_by(|a, b| a.keeper().cmp(b.keeper()));

    for group in &groups {
        stats.duplicate_groups += 1;
        stats.duplicate_files += group.removable().len();
        stats.reclaimable_space += group.wasted_space();
    }

    log::info!(
        "Content scan: {} files, {} size-unique, {} hashed, {} failed, {} duplicate groups",
        stats.total_files,
        stats.eliminated_by_size,
        stats.hashed_files,
        stats.failed_files,
        stats.duplicate_groups
    );

    (groups, stats)
}
