//! yt-dlp `--flat-playlist -J` output.

use serde::Deserialize;

use super::{Catalog, CatalogEntry};

#[derive(Debug, Deserialize)]
struct FlatPlaylist {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    uploader: Option<String>,
    #[serde(default)]
    entries: Option<Vec<Option<FlatEntry>>>,
}

#[derive(Debug, Deserialize)]
struct FlatEntry {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

const UNKNOWN: &str = "unknown";

/// Parses a flat playlist listing. Entries without a URL (removed or private
/// items yt-dlp still lists) are dropped with a warning; a missing title
/// becomes the empty string. The channel falls back to the uploader.
pub fn parse_flat_playlist(json: &[u8]) -> Result<Catalog, serde_json::Error> {
    let raw: FlatPlaylist = serde_json::from_slice(json)?;

    let entries = raw
        .entries
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(pos, entry)| {
            let entry = entry?;
            match entry.url {
                Some(url) if !url.is_empty() => Some(CatalogEntry {
                    url,
                    title: entry.title.unwrap_or_default(),
                }),
                _ => {
                    tracing::warn!(
                        position = pos,
                        title = entry.title.as_deref().unwrap_or(""),
                        "playlist entry has no url, skipping"
                    );
                    None
                }
            }
        })
        .collect();

    Ok(Catalog {
        title: raw.title.unwrap_or_else(|| UNKNOWN.to_string()),
        channel: raw
            .channel
            .or(raw.uploader)
            .unwrap_or_else(|| UNKNOWN.to_string()),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_in_order() {
        let json = br#"{
            "_type": "playlist",
            "title": "Conference 2024",
            "channel": "Some Org",
            "entries": [
                {"_type": "url", "url": "https://www.youtube.com/watch?v=a", "title": "Talk A", "duration": 61},
                {"_type": "url", "url": "https://www.youtube.com/watch?v=b", "title": "Talk B"}
            ]
        }"#;
        let catalog = parse_flat_playlist(json).unwrap();
        assert_eq!(catalog.title, "Conference 2024");
        assert_eq!(catalog.channel, "Some Org");
        assert_eq!(
            catalog.entries,
            vec![
                CatalogEntry::new("https://www.youtube.com/watch?v=a", "Talk A"),
                CatalogEntry::new("https://www.youtube.com/watch?v=b", "Talk B"),
            ]
        );
    }

    #[test]
    fn skips_entries_without_url() {
        let json = br#"{
            "title": "P",
            "channel": "C",
            "entries": [
                {"title": "[Private video]", "url": null},
                null,
                {"url": "", "title": "empty"},
                {"url": "https://x/1", "title": "Kept"}
            ]
        }"#;
        let catalog = parse_flat_playlist(json).unwrap();
        assert_eq!(catalog.entries, vec![CatalogEntry::new("https://x/1", "Kept")]);
    }

    #[test]
    fn missing_fields_fall_back() {
        let json = br#"{"uploader": "Uploader", "entries": [{"url": "https://x/1"}]}"#;
        let catalog = parse_flat_playlist(json).unwrap();
        assert_eq!(catalog.title, "unknown");
        assert_eq!(catalog.channel, "Uploader");
        assert_eq!(catalog.entries[0].title, "");
    }

    #[test]
    fn no_entries() {
        let catalog = parse_flat_playlist(br#"{"title": "Empty", "channel": "C"}"#).unwrap();
        assert!(catalog.entries.is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_flat_playlist(b"ERROR: not json").is_err());
    }
}
