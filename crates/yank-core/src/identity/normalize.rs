//! Canonical form of a display title.

use unicode_normalization::UnicodeNormalization;

/// Characters removed from titles: unsafe in filenames or carrying no identity.
const STRIPPED: &[char] = &['|', '/', '\\', ':', '*', '?', '"', '<', '>', '.', ','];

/// Canonicalizes a display title.
///
/// In order: trim, NFKC, lowercase, drop all whitespace, drop the characters
/// in [`STRIPPED`]. Total and pure; an empty title yields an empty string.
/// Other punctuation (`!`, `'`, `&`, ...) is kept as is.
///
/// Dropping characters can put a combining mark next to a letter it was
/// separated from, so the filtered string is composed once more.
pub fn normalize(title: &str) -> String {
    let compat: String = title.trim().nfkc().collect();
    let filtered: String = compat
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !STRIPPED.contains(c))
        .collect();
    filtered.nfkc().collect()
}
