//! One sync run: list the collection, establish what is on disk, fetch the rest.
//!
//! catalog → target dir → scan → seed guard → orchestrate. The scan is the
//! only baseline the run has, so a scan error aborts before any fetch is
//! dispatched. Per-entry failures end up in the report instead.
//!
//! A dry run never touches the filesystem: a missing target directory is
//! treated as empty instead of being created.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::CatalogSource;
use crate::fetch::Fetcher;
use crate::guard::FingerprintGuard;
use crate::orchestrator::{FetchOrchestrator, RunReport};
use crate::scan;
use crate::target::{collection_dir_name, prepare_target_dir};

/// Where and how wide a sync runs.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Parent of the per-collection directory.
    pub output_root: PathBuf,
    pub max_concurrent: usize,
    /// Do not create the target directory.
    pub dry_run: bool,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct SyncResult {
    pub target_dir: PathBuf,
    /// Fingerprints found on disk before any fetch.
    pub existing: usize,
    pub report: RunReport,
}

/// Runs one sync of `url`. `make_fetcher` receives the target directory once
/// it is known and returns the fetcher for every claimed entry.
pub async fn sync_collection<C, M, F>(
    source: &C,
    url: &str,
    opts: &SyncOptions,
    make_fetcher: M,
) -> Result<SyncResult>
where
    C: CatalogSource + ?Sized,
    M: FnOnce(&Path) -> Arc<F>,
    F: Fetcher + ?Sized + 'static,
{
    let catalog = source
        .fetch_catalog(url)
        .with_context(|| format!("list collection {}", url))?;
    tracing::info!(
        title = %catalog.title,
        channel = %catalog.channel,
        entries = catalog.entries.len(),
        "collection listed"
    );

    let target_dir = if opts.dry_run {
        opts.output_root.join(collection_dir_name(&catalog))
    } else {
        prepare_target_dir(&opts.output_root, &catalog)?
    };

    let existing = if opts.dry_run && !target_dir.exists() {
        tracing::info!(dir = %target_dir.display(), "directory does not exist yet");
        HashSet::new()
    } else {
        scan::scan(&target_dir)
            .with_context(|| format!("read directory {}", target_dir.display()))?
    };
    let mut guard = FingerprintGuard::new();
    let existing = guard.seed(existing);
    tracing::info!(existing, dir = %target_dir.display(), "existing downloads detected");

    let fetcher = make_fetcher(&target_dir);
    let report = FetchOrchestrator::new(opts.max_concurrent)
        .run(catalog.entries, Arc::new(guard), fetcher)
        .await?;

    Ok(SyncResult {
        target_dir,
        existing,
        report,
    })
}
