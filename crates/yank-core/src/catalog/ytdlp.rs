use super::{parse_flat_playlist, Catalog, CatalogError, CatalogSource};
use crate::process::run_tool;

/// Lists a playlist with `yt-dlp --flat-playlist -J <url>`.
#[derive(Debug, Clone)]
pub struct YtDlpCatalog {
    program: String,
}

impl YtDlpCatalog {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl CatalogSource for YtDlpCatalog {
    fn fetch_catalog(&self, url: &str) -> Result<Catalog, CatalogError> {
        tracing::debug!(program = %self.program, url, "listing playlist");
        let stdout = run_tool(&self.program, ["--flat-playlist", "-J", url])?;
        Ok(parse_flat_playlist(&stdout)?)
    }
}
