//! Data file selection.
//!
//! Each station's wagon data lives in one or more XML files whose names
//! start with the station shortcode (e.g. `FF_2024.xml` for `FF`). The
//! lookup service asks a [`CandidateProvider`] which files might hold a
//! station's data, so the flat directory scan can be swapped for an index
//! without touching scanning or caching.

use std::path::{Path, PathBuf};

use crate::domain::StationPrefix;

/// File extension of data files.
const XML_FILE_EXTENSION: &str = ".xml";

/// Source of candidate data files for a station.
pub trait CandidateProvider: Send + Sync {
    /// Files that may contain data for `station`, in the order they should
    /// be scanned. An empty result means the station has no data at all.
    fn candidates(&self, station: &StationPrefix) -> Vec<PathBuf>;
}

/// Finds candidate files by listing a single directory.
#[derive(Debug, Clone)]
pub struct DirectoryLocator {
    dir: PathBuf,
}

impl DirectoryLocator {
    /// Create a locator over the given data directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl CandidateProvider for DirectoryLocator {
    fn candidates(&self, station: &StationPrefix) -> Vec<PathBuf> {
        find_candidate_files(&self.dir, station.as_str())
    }
}

/// List regular files directly inside `dir` whose name starts with `prefix`
/// and ends in `.xml`.
///
/// Matching is case-sensitive. Results keep directory listing order. A
/// missing or unreadable directory yields no candidates rather than an
/// error.
pub fn find_candidate_files(dir: &Path, prefix: &str) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "cannot list data directory");
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.starts_with(prefix) || !name.ends_with(XML_FILE_EXTENSION) {
            continue;
        }

        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files
}
