//! Concurrent fetch orchestrator.
//!
//! Every catalog entry becomes a task that fingerprints its title and tries
//! to claim it in the shared [`FingerprintGuard`]. A lost claim means the
//! title is already on disk or another entry got it first: the entry is
//! skipped. A won claim calls the fetcher exactly once. Up to
//! `max_concurrent` tasks are in flight; the run returns only after every
//! task has reached a terminal outcome.

mod outcome;

pub use outcome::{Outcome, OutcomeStatus, RunReport};

use anyhow::Result;
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::catalog::CatalogEntry;
use crate::fetch::Fetcher;
use crate::guard::{Claim, FingerprintGuard};
use crate::identity::title_fingerprint;

/// Runs catalog entries against a guard with a bounded number of tasks.
#[derive(Debug, Clone, Copy)]
pub struct FetchOrchestrator {
    max_concurrent: usize,
}

impl Default for FetchOrchestrator {
    fn default() -> Self {
        Self::new(4)
    }
}

impl FetchOrchestrator {
    /// `max_concurrent` is clamped to at least 1.
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            max_concurrent: max_concurrent.max(1),
        }
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Processes every entry and returns one outcome per entry, in completion
    /// order. A failed fetch is recorded and never stops its siblings.
    pub async fn run<F>(
        &self,
        entries: Vec<CatalogEntry>,
        guard: Arc<FingerprintGuard>,
        fetcher: Arc<F>,
    ) -> Result<RunReport>
    where
        F: Fetcher + ?Sized + 'static,
    {
        let total = entries.len();
        let mut pending = entries.into_iter().enumerate();
        let mut join_set = JoinSet::new();
        let mut report = RunReport {
            outcomes: Vec::with_capacity(total),
        };

        loop {
            while join_set.len() < self.max_concurrent {
                let Some((index, entry)) = pending.next() else {
                    break;
                };
                let guard = Arc::clone(&guard);
                let fetcher = Arc::clone(&fetcher);
                join_set.spawn(process_entry(index, entry, guard, fetcher));
            }

            let Some(res) = join_set.join_next().await else {
                break;
            };
            let outcome = res.map_err(|e| anyhow::anyhow!("fetch task join: {}", e))?;
            report.outcomes.push(outcome);
        }

        tracing::info!(
            total,
            downloaded = report.count(OutcomeStatus::Succeeded),
            skipped = report.count(OutcomeStatus::Skipped),
            failed = report.count(OutcomeStatus::Failed),
            "all entries processed"
        );
        Ok(report)
    }
}

async fn process_entry<F>(
    index: usize,
    entry: CatalogEntry,
    guard: Arc<FingerprintGuard>,
    fetcher: Arc<F>,
) -> Outcome
where
    F: Fetcher + ?Sized + 'static,
{
    let fingerprint = title_fingerprint(&entry.title);

    match guard.claim(&fingerprint) {
        Claim::Won => {}
        Claim::OnDisk => {
            tracing::info!(index, title = %entry.title, %fingerprint, "already downloaded");
            return Outcome::new(index, entry, fingerprint, OutcomeStatus::Skipped);
        }
        Claim::Taken => {
            tracing::info!(
                index,
                title = %entry.title,
                %fingerprint,
                "same title claimed by another entry"
            );
            return Outcome::new(index, entry, fingerprint, OutcomeStatus::Skipped);
        }
    }

    tracing::info!(index, title = %entry.title, %fingerprint, "downloading");
    let task_entry = entry.clone();
    let result = tokio::task::spawn_blocking(move || fetcher.fetch(&task_entry)).await;

    match result {
        Ok(Ok(())) => {
            tracing::info!(index, title = %entry.title, "download finished");
            Outcome::new(index, entry, fingerprint, OutcomeStatus::Succeeded)
        }
        Ok(Err(e)) => {
            tracing::warn!(index, title = %entry.title, "download failed: {}", e);
            Outcome::failed(index, entry, fingerprint, e.to_string())
        }
        Err(e) => {
            tracing::warn!(index, title = %entry.title, "download task aborted: {}", e);
            Outcome::failed(index, entry, fingerprint, format!("fetch task aborted: {}", e))
        }
    }
}
