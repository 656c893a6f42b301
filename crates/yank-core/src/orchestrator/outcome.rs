//! Per-entry results of a run.

use std::fmt;

use crate::catalog::CatalogEntry;
use crate::identity::Fingerprint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeStatus {
    /// Already on disk, or claimed by another entry with the same title.
    Skipped,
    Succeeded,
    Failed,
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutcomeStatus::Skipped => "skipped",
            OutcomeStatus::Succeeded => "succeeded",
            OutcomeStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Terminal state of one catalog entry.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Position of the entry in the catalog.
    pub index: usize,
    pub entry: CatalogEntry,
    pub fingerprint: Fingerprint,
    pub status: OutcomeStatus,
    /// Fetch error message, set only for `Failed`.
    pub error: Option<String>,
}

impl Outcome {
    pub(super) fn new(
        index: usize,
        entry: CatalogEntry,
        fingerprint: Fingerprint,
        status: OutcomeStatus,
    ) -> Self {
        Self {
            index,
            entry,
            fingerprint,
            status,
            error: None,
        }
    }

    pub(super) fn failed(
        index: usize,
        entry: CatalogEntry,
        fingerprint: Fingerprint,
        error: String,
    ) -> Self {
        Self {
            error: Some(error),
            ..Self::new(index, entry, fingerprint, OutcomeStatus::Failed)
        }
    }
}

/// Every outcome of a run, in completion order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub outcomes: Vec<Outcome>,
}

impl RunReport {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn count(&self, status: OutcomeStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == OutcomeStatus::Failed)
    }

    /// Outcomes ordered by catalog position.
    pub fn sorted(mut self) -> Vec<Outcome> {
        self.outcomes.sort_by_key(|o| o.index);
        self.outcomes
    }

    /// One-line tally, e.g. `3 entries: 1 downloaded, 2 skipped, 0 failed`.
    pub fn summary(&self) -> String {
        format!(
            "{} entries: {} downloaded, {} skipped, {} failed",
            self.len(),
            self.count(OutcomeStatus::Succeeded),
            self.count(OutcomeStatus::Skipped),
            self.count(OutcomeStatus::Failed)
        )
    }
}
