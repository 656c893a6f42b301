//! Target directory for a collection: `<root>/<title>_BY_<channel>`.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;

/// Directory name for a collection, safe for Linux.
pub fn collection_dir_name(catalog: &Catalog) -> String {
    sanitize_dir_name(&format!("{}_BY_{}", catalog.title, catalog.channel))
}

/// Sanitizes one path component for Linux.
///
/// - Replaces NUL, `/`, `\`, and control characters with `_`
/// - Trims leading/trailing whitespace
/// - Limits length to 255 bytes (Linux NAME_MAX)
///
/// Spaces and other punctuation are kept so the directory still reads like
/// the playlist title.
pub fn sanitize_dir_name(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let replaced: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    let trimmed = replaced.trim();

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Creates `root/<collection dir>` if needed and returns its path.
pub fn prepare_target_dir(root: &Path, catalog: &Catalog) -> Result<PathBuf> {
    let dir = root.join(collection_dir_name(catalog));
    if dir.is_dir() {
        tracing::info!("directory already exists: {}", dir.display());
        return Ok(dir);
    }
    fs::create_dir_all(&dir).with_context(|| format!("create directory {}", dir.display()))?;
    tracing::info!("directory created: {}", dir.display());
    Ok(dir)
}
