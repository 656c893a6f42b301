//! Fetch collaborator: transfers one catalog entry into the target directory.
//!
//! The orchestrator calls a [`Fetcher`] exactly once per claimed entry, on
//! the blocking pool. Whatever retry or resume the tool does internally is
//! its own business. Plain closures work as fetchers, which keeps tests and
//! wrappers (timeouts, rate limits) cheap to write.

mod ytdlp;

pub use ytdlp::YtDlpFetcher;

use crate::catalog::CatalogEntry;
use crate::process::ToolError;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Tool(#[from] ToolError),
    #[error("{0}")]
    Other(String),
}

/// Performs the transfer of one entry. Blocking.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, entry: &CatalogEntry) -> Result<(), FetchError>;
}

impl<F> Fetcher for F
where
    F: Fn(&CatalogEntry) -> Result<(), FetchError> + Send + Sync,
{
    fn fetch(&self, entry: &CatalogEntry) -> Result<(), FetchError> {
        self(entry)
    }
}

/// Fetcher for `--dry-run`: logs what would be transferred and succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunFetcher;

impl Fetcher for DryRunFetcher {
    fn fetch(&self, entry: &CatalogEntry) -> Result<(), FetchError> {
        tracing::info!(title = %entry.title, url = %entry.url, "dry run: would download");
        Ok(())
    }
}
