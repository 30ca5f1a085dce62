//! Directory walker built on walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! tree and collecting file metadata for duplicate detection. Traversal is
//! sequential and depth-first; only regular files are yielded, never
//! directory entries or symlinks.
//!
//! Per-entry failures (a directory that cannot be read, a file whose
//! metadata vanished mid-walk) surface as `Err` items in the iterator so
//! the caller can log them and keep going.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Downloads"));
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(file) => println!("{}: {} bytes", file.path.display(), file.size),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileEntry, ScanError};

/// Sequential directory walker for file discovery.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root directory.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            root: path.to_path_buf(),
        }
    }

    /// Walk the directory tree, yielding every regular file beneath the root.
    ///
    /// Symlinks are not followed. Each item is either a [`FileEntry`] or a
    /// [`ScanError`] for an entry that could not be read.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry, ScanError>> {
        WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        return None;
                    }
                    match entry.metadata() {
                        Ok(meta) => {
                            Some(Ok(FileEntry::new(entry.path().to_path_buf(), meta.len())))
                        }
                        Err(e) => Some(Err(convert_error(e))),
                    }
                }
                Err(e) => Some(Err(convert_error(e))),
            })
    }

    /// Walk the tree and collect all readable files into a vector.
    ///
    /// Errors are logged as warnings and counted; the walk never aborts on a
    /// per-entry failure. Returns the entries and the number of entries skipped.
    #[must_use]
    pub fn collect_files(&self) -> (Vec<FileEntry>, usize) {
        let mut files = Vec::new();
        let mut skipped = 0usize;

        for entry in self.walk() {
            match entry {
                Ok(file) => files.push(file),
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    skipped += 1;
                }
            }
        }

        log::debug!(
            "Walk of {} complete: {} files, {} skipped",
            self.root.display(),
            files.len(),
            skipped
        );

        (files, skipped)
    }
}

/// Convert a walkdir error into a [`ScanError`].
fn convert_error(err: walkdir::Error) -> ScanError {
    let path = err.path().map(Path::to_path_buf);
    match (path, err.io_error().map(std::io::Error::kind)) {
        (Some(path), Some(std::io::ErrorKind::PermissionDenied)) => {
            ScanError::PermissionDenied(path)
        }
        (Some(path), Some(_)) => ScanError::Io {
            path,
            // The io_error reference cannot be moved out of walkdir's error,
            // so rebuild from its string form.
            source: std::io::Error::other(err.to_string()),
        },
        _ => ScanError::Walk(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_walk_flat_directory() {
        let tmp = TempDir::new().unwrap();
        create_file(tmp.path(), "a.txt", b"aaa");
        create_file(tmp.path(), "b.txt", b"bbbbb");

        let (files, skipped) = Walker::new(tmp.path()).collect_files();

        assert_eq!(files.len(), 2);
        assert_eq!(skipped, 0);

        let total: u64 = files.iter().map(|f| f.size).sum();
        assert_eq!(total, 8);
    }

    #[test]
    fn test_walk_recurses_into_subdirectories() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("nested").join("deeper");
        fs::create_dir_all(&sub).unwrap();
        create_file(tmp.path(), "top.txt", b"x");
        create_file(&sub, "bottom.txt", b"y");

        let (files, _) = Walker::new(tmp.path()).collect_files();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.path.ends_with("bottom.txt")));
    }

    #[test]
    fn test_walk_yields_no_directory_entries() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("empty_dir")).unwrap();
        create_file(tmp.path(), "only.txt", b"z");

        let (files, _) = Walker::new(tmp.path()).collect_files();

        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("only.txt"));
    }

    #[test]
    fn test_walk_empty_directory() {
        let tmp = TempDir::new().unwrap();
        let (files, skipped) = Walker::new(tmp.path()).collect_files();

        assert!(files.is_empty());
        assert_eq!(skipped, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_does_not_follow_symlinks() {
        let tmp = TempDir::new().unwrap();
        let target = create_file(tmp.path(), "real.txt", b"data");
        std::os::unix::fs::symlink(&target, tmp.path().join("link.txt")).unwrap();

        let (files, _) = Walker::new(tmp.path()).collect_files();

        // Only the regular file counts; the symlink is not a regular file.
        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("real.txt"));
    }
}
