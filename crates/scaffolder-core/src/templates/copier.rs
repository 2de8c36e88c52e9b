//! Filesystem helpers used while materializing a template

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Version-control metadata directory tolerated by emptiness checks and kept by clears
pub const VCS_DIR: &str = ".git";

/// Check whether a directory counts as empty
///
/// A path is empty if it does not exist, has no entries, or holds nothing but
/// a `.git` directory. Never mutates anything.
pub fn path_is_empty(path: &Path) -> io::Result<bool> {
    let mut entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(true),
        Err(e) => return Err(e),
    };

    match entries.next() {
        None => Ok(true),
        Some(first) => Ok(first?.file_name() == VCS_DIR && entries.next().is_none()),
    }
}

/// Remove everything inside `dir` except the `.git` directory
///
/// Missing directories and entries that vanish mid-way are not errors, so
/// calling this twice leaves the same state as calling it once.
pub fn clear_directory(dir: &Path) -> io::Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e),
        };
        if entry.file_name() == VCS_DIR {
            continue;
        }
        remove_path(&entry.path())?;
    }

    Ok(())
}

/// Remove a file or directory tree; a path that is already gone counts as removed
///
/// Returns whether something was actually deleted.
pub fn remove_path(path: &Path) -> io::Result<bool> {
    let result = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Copy a file or a whole directory tree from `src` to `dest`
///
/// Directories are created depth-first before their children; files are copied
/// byte for byte, replacing any existing file of the same name. Returns the
/// number of files written.
pub fn copy_entry(src: &Path, dest: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(src).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| ScaffoldError::Copy {
            src: e.path().unwrap_or(src).to_path_buf(),
            dest: dest.to_path_buf(),
            source: e.into(),
        })?;

        let relative = entry.path().strip_prefix(src).unwrap_or(Path::new(""));
        let target = if relative.as_os_str().is_empty() {
            dest.to_path_buf()
        } else {
            dest.join(relative)
        };

        let outcome = if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
        } else {
            fs::copy(entry.path(), &target).map(|_| {
                copied += 1;
            })
        };

        outcome.map_err(|source| ScaffoldError::Copy {
            src: entry.path().to_path_buf(),
            dest: target.clone(),
            source,
        })?;
    }

    Ok(copied)
}
