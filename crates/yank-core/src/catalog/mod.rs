//! Catalog of a remote collection: what there is to fetch.
//!
//! The core only needs a title and a URL per entry. Listing a playlist is
//! left to a [`CatalogSource`]; [`YtDlpCatalog`] asks yt-dlp for a flat
//! listing.

mod parse;
mod ytdlp;

pub use parse::parse_flat_playlist;
pub use ytdlp::YtDlpCatalog;

use serde::{Deserialize, Serialize};

use crate::process::ToolError;

/// One item to fetch. Titles may repeat within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub url: String,
    pub title: String,
}

impl CatalogEntry {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// A listed collection with the names used for its target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub title: String,
    pub channel: String,
    pub entries: Vec<CatalogEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Tool(#[from] ToolError),
    #[error("invalid playlist JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Lists the entries of a collection URL. Blocking.
pub trait CatalogSource {
    fn fetch_catalog(&self, url: &str) -> Result<Catalog, CatalogError>;
}
