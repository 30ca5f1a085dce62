//! Duplicate grouping: stem-keyed name groups and digest-keyed content groups.
//!
//! # Overview
//!
//! This module provides the grouping half of duplicate detection:
//!
//! - [`group_by_stem`] buckets file paths by filename stem (extension
//!   stripped) and keeps only buckets with two or more eligible members.
//! - [`select_name_keepers`] orders each name group by file size under a
//!   [`KeeperPolicy`] and designates a keeper. A group whose sizes cannot
//!   all be determined is skipped whole, with a warning.
//! - [`DuplicateGroup`] holds a confirmed content-duplicate group with a
//!   deterministic lexicographic keeper.
//!
//! Grouping is pure computation; only the injected size lookup touches the
//! filesystem.
//!
//! # Example
//!
//! ```
//! use dupescan::duplicates::{group_by_stem, select_name_keepers, KeeperPolicy};
//! use std::path::PathBuf;
//!
//! let paths = vec![
//!     PathBuf::from("/music/track.mp3"),
//!     PathBuf::from("/backup/track.m4a"),
//!     PathBuf::from("/music/other.mp3"),
//! ];
//!
//! let grouped = group_by_stem(paths, None);
//! assert_eq!(grouped.len(), 1); // only "track" has two members
//!
//! let groups = select_name_keepers(grouped, KeeperPolicy::LargestWins, |p| {
//!     std::fs::metadata(p).map(|m| m.len())
//! });
//! # let _ = groups;
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::scanner::{digest_to_hex, Digest, FileEntry};

/// Which file a name group keeps when duplicates are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeeperPolicy {
    /// Keep the largest file (generic dedup).
    #[default]
    LargestWins,
    /// Keep the smallest file (lossy-audio dedup, where the smaller
    /// encode is preferred as canonical).
    SmallestWins,
}

/// A name-duplicate group with its keeper resolved.
///
/// `files` is ordered keeper-first; the ordering is determined by the
/// [`KeeperPolicy`] used during selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameGroup {
    /// Filename stem shared by every member
    pub stem: String,
    /// Member files, keeper first
    pub files: Vec<FileEntry>,
}

impl NameGroup {
    /// The file selected to be retained.
    #[must_use]
    pub fn keeper(&self) -> &FileEntry {
        &self.files[0]
    }

    /// The files that are candidates for removal.
    #[must_use]
    pub fn removable(&self) -> &[FileEntry] {
        &self.files[1..]
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Derive the removal plan for this group.
    #[must_use]
    pub fn removal_plan(&self) -> RemovalPlan {
        RemovalPlan {
            keeper: self.keeper().path.clone(),
            removable: self.removable().iter().map(|f| f.path.clone()).collect(),
        }
    }
}

/// Confirmed content-duplicate group of files.
///
/// `files` is sorted lexicographically; the first path is the keeper. This
/// makes keeper selection deterministic and reproducible across runs on an
/// unchanged filesystem, independent of enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// SHA-256 digest of the file content
    pub digest: Digest,
    /// File size in bytes, shared by all members
    pub size: u64,
    /// Member paths in lexicographic order, keeper first
    pub files: Vec<PathBuf>,
}

impl DuplicateGroup {
    /// Create a new group, sorting the members lexicographically.
    #[must_use]
    pub fn new(digest: Digest, size: u64, mut files: Vec<PathBuf>) -> Self {
        files.sort();
        Self {
            digest,
            size,
            files,
        }
    }

    /// The lexicographically first path, retained as the original.
    #[must_use]
    pub fn keeper(&self) -> &Path {
        &self.files[0]
    }

    /// The paths that are candidates for removal.
    #[must_use]
    pub fn removable(&self) -> &[PathBuf] {
        &self.files[1..]
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Space reclaimed if every duplicate were removed.
    #[must_use]
    pub fn wasted_space(&self) -> u64 {
        self.size * (self.files.len() as u64).saturating_sub(1)
    }

    /// Digest as a hexadecimal string.
    #[must_use]
    pub fn digest_hex(&self) -> String {
        digest_to_hex(&self.digest)
    }

    /// Derive the removal plan for this group.
    #[must_use]
    pub fn removal_plan(&self) -> RemovalPlan {
        RemovalPlan {
            keeper: self.keeper().to_path_buf(),
            removable: self.removable().to_vec(),
        }
    }
}

/// One keeper plus the group members designated for removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalPlan {
    /// The file to retain
    pub keeper: PathBuf,
    /// The files to emit removal commands for
    pub removable: Vec<PathBuf>,
}

/// Extract the filename stem: the base name with its extension removed.
///
/// Returns `None` for paths with no base name (e.g. `/` or `..`).
#[must_use]
pub fn stem(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}

/// Build a case-insensitive extension predicate for [`group_by_stem`].
///
/// Extensions are matched without their leading dot: `["mp3", "m4a"]`
/// accepts `song.MP3` and rejects `song.flac`.
#[must_use]
pub fn extension_filter(extensions: &[String]) -> impl Fn(&Path) -> bool + '_ {
    move |path: &Path| {
        path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)))
    }
}

/// Group paths by filename stem, keeping only duplicate-bearing groups.
///
/// Paths rejected by `predicate` (when given) are ignored entirely.
/// Grouping is case-sensitive on the stem. Within each group, members keep
/// their order of first appearance in the input.
#[must_use]
pub fn group_by_stem(
    paths: impl IntoIterator<Item = PathBuf>,
    predicate: Option<&dyn Fn(&Path) -> bool>,
) -> Vec<(String, Vec<PathBuf>)> {
    let mut groups: HashMap<String, Vec<PathBuf>> = HashMap::new();

    for path in paths {
        if let Some(pred) = predicate {
            if !pred(&path) {
                continue;
            }
        }
        let Some(key) = stem(&path) else {
            log::debug!("No stem for path, ignoring: {}", path.display());
            continue;
        };
        groups.entry(key).or_default().push(path);
    }

    let mut duplicates: Vec<(String, Vec<PathBuf>)> = groups
        .into_iter()
        .filter(|(_, paths)| paths.len() > 1)
        .collect();

    // Deterministic report order regardless of HashMap iteration order.
    duplicates.sort_by(|a, b| a.0.cmp(&b.0));
    duplicates
}

/// Resolve keepers for stem groups under the given policy.
///
/// `size_of` is the external size lookup. If it fails for any member of a
/// group, the whole group is skipped with a warning; no member of a
/// partially-stattable group is ever planned for removal.
///
/// Sorting is by file size (descending for [`KeeperPolicy::LargestWins`],
/// ascending for [`KeeperPolicy::SmallestWins`]) and stable, so size ties
/// keep their first-appearance order.
#[must_use]
pub fn select_name_keepers(
    grouped: Vec<(String, Vec<PathBuf>)>,
    policy: KeeperPolicy,
    size_of: impl Fn(&Path) -> std::io::Result<u64>,
) -> Vec<NameGroup> {
    let mut result = Vec::with_capacity(grouped.len());

    'groups: for (stem, paths) in grouped {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            match size_of(&path) {
                Ok(size) => files.push(FileEntry::new(path, size)),
                Err(e) => {
                    log::warn!(
                        "Could not determine size of {}, skipping group '{}': {}",
                        path.display(),
                        stem,
                        e
                    );
                    continue 'groups;
                }
            }
        }

        match policy {
            KeeperPolicy::LargestWins => {
                files.sort_by(|a, b| b.size.cmp(&a.size));
            }
            KeeperPolicy::SmallestWins => {
                files.sort_by(|a, b| a.size.cmp(&b.size));
            }
        }

        result.push(NameGroup { stem, files });
    }

    result
}
