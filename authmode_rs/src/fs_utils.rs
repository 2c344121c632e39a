//! Candidate file discovery.
//!
//! Walks a root directory for `.json` files and drops every path that
//! contains an exclusion marker.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::types::{JSON_SUFFIX, LOCAL_RUN_OUTPUTS};

pub fn is_excluded(path: &Path, markers: &[String]) -> bool {
    let path_str = path.to_string_lossy();
    path_str.contains(LOCAL_RUN_OUTPUTS)
        || markers
            .iter()
            .filter(|marker| !marker.is_empty())
            .any(|marker| path_str.contains(marker.as_str()))
}

/// Regular files, plus symlinks that resolve to a regular file. Symlinked
/// directories are still not descended.
pub fn is_json_file(entry: &DirEntry) -> bool {
    let is_file = entry.file_type().is_file()
        || (entry.path_is_symlink() && entry.path().is_file());
    is_file && entry.file_name().to_string_lossy().ends_with(JSON_SUFFIX)
}

/// Collect every `.json` file below `root`, skipping excluded paths.
///
/// Excluded directories are pruned, not descended. Entries that cannot be
/// read are dropped silently; the walk never fails as a whole.
pub fn find_json_files(root: &Path, markers: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded(e.path(), markers))
    {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!("skipping unreadable entry: {}", err);
                continue;
            }
        };

        if is_json_file(&entry) {
            files.push(entry.into_path());
        }
    }

    files
}
