//! Recursive discovery of candidate files below a root directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::error::StatsError;
use crate::languages::{is_hidden, is_ignored_dir};

/// Map a failure to inspect or open the root directory onto its error kind.
fn root_error(path: &Path, err: io::Error) -> StatsError {
    match err.kind() {
        io::ErrorKind::NotFound => StatsError::DirectoryNotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => StatsError::DirectoryNotReadable(path.to_path_buf()),
        _ => StatsError::DirectoryEnumerationFailed {
            path: path.to_path_buf(),
            source: err,
        },
    }
}

/// Collect every regular file below `root`, skipping hidden entries and ignored directories.
///
/// The root itself is exempt from the hidden and ignore rules. Links to regular files
/// are collected; links to directories are never descended into, so link cycles cannot
/// recur. Dangling links and other failures below the root are logged and skipped;
/// only a root that cannot be opened is an error. The order of the returned paths
/// follows directory-entry order and is not meaningful.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>, StatsError> {
    let metadata = fs::metadata(root).map_err(|err| root_error(root, err))?;
    if !metadata.is_dir() {
        return Err(StatsError::NotADirectory(root.to_path_buf()));
    }

    let entries = fs::read_dir(root).map_err(|err| root_error(root, err))?;
    let mut files = Vec::new();
    scan_entries(root, entries, &mut files);
    debug!("collected {} files under {}", files.len(), root.display());
    Ok(files)
}

fn scan_directory(path: &Path, files: &mut Vec<PathBuf>) {
    match fs::read_dir(path) {
        Ok(entries) => scan_entries(path, entries, files),
        Err(err) => warn!("Could not read directory {}: {}", path.display(), err),
    }
}

fn scan_entries(dir: &Path, entries: fs::ReadDir, files: &mut Vec<PathBuf>) {
    for entry_result in entries {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Could not read entry in {}: {}", dir.display(), err);
                continue;
            }
        };

        let entry_path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if is_hidden(&name) {
            trace!("skipping hidden entry {}", entry_path.display());
            continue;
        }

        // DirEntry::file_type does not traverse symlinks.
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(err) => {
                warn!("Could not read type of {}: {}", entry_path.display(), err);
                continue;
            }
        };

        if file_type.is_dir() {
            if is_ignored_dir(&name) {
                debug!("skipping ignored directory {}", entry_path.display());
                continue;
            }
            scan_directory(&entry_path, files);
        } else if file_type.is_file() {
            files.push(entry_path);
        } else if file_type.is_symlink() {
            // Linked files are counted; linked directories are never descended into.
            match fs::metadata(&entry_path) {
                Ok(target) if target.is_file() => files.push(entry_path),
                Ok(_) => trace!("not following directory link {}", entry_path.display()),
                Err(err) => warn!("Could not resolve link {}: {}", entry_path.display(), err),
            }
        } else {
            trace!("skipping non-regular entry {}", entry_path.display());
        }
    }
}
