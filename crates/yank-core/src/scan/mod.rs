//! Directory scanner: which titles are already on disk.
//!
//! Walks the target directory recursively, classifies each file as complete
//! or in-progress by its suffix, and fingerprints the base title of every
//! complete file. In-progress files never count, so an abandoned transfer
//! does not block a retry.

mod classify;

pub use classify::{is_complete, strip_all_extensions, IN_PROGRESS_SUFFIXES};

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::identity::{fingerprint, normalize, Fingerprint};

/// A file found under the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    /// File name with every extension removed.
    pub base_name: String,
    pub is_complete: bool,
}

impl DirectoryEntry {
    /// Fingerprint of the recovered title; `None` for in-progress files.
    pub fn fingerprint(&self) -> Option<Fingerprint> {
        self.is_complete
            .then(|| fingerprint(&normalize(&self.base_name)))
    }
}

/// The scan could not establish what is on disk. Fatal to a run.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("cannot scan {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Lists every non-directory entry under `dir` with its classification.
pub fn scan_entries(dir: &Path) -> Result<Vec<DirectoryEntry>, ScanError> {
    let mut entries = Vec::new();
    for item in WalkDir::new(dir) {
        let item = item.map_err(|source| ScanError::Walk {
            path: source.path().unwrap_or(dir).to_path_buf(),
            source,
        })?;
        if item.file_type().is_dir() {
            continue;
        }
        if item.depth() == 0 {
            return Err(ScanError::NotADirectory(dir.to_path_buf()));
        }
        let file_name = item.file_name().to_string_lossy().into_owned();
        entries.push(DirectoryEntry {
            base_name: strip_all_extensions(&file_name).to_string(),
            is_complete: is_complete(&file_name),
            path: item.into_path(),
        });
    }
    Ok(entries)
}

/// Fingerprints of every complete file under `dir`.
pub fn scan(dir: &Path) -> Result<HashSet<Fingerprint>, ScanError> {
    let mut found = HashSet::new();
    for entry in scan_entries(dir)? {
        let Some(fp) = entry.fingerprint() else {
            tracing::debug!(path = %entry.path.display(), "ignoring in-progress file");
            continue;
        };
        tracing::debug!(
            path = %entry.path.display(),
            normalized = %normalize(&entry.base_name),
            fingerprint = %fp,
            "detected existing file"
        );
        found.insert(fp);
    }
    Ok(found)
}
