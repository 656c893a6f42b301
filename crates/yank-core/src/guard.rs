//! Claim registry for fingerprints within one run.
//!
//! Seeded from the directory scan before any fetch task starts, then only
//! touched through [`FingerprintGuard::claim`]. The membership test and the
//! insert happen under one lock, so two tasks racing on the same fingerprint
//! can never both win.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::identity::Fingerprint;

/// Who holds a fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Holder {
    Disk,
    Task,
}

/// Result of a claim attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// First claim: the caller fetches.
    Won,
    /// Seeded from a complete file on disk.
    OnDisk,
    /// Claimed earlier in this run by another entry.
    Taken,
}

impl Claim {
    pub fn is_won(self) -> bool {
        self == Claim::Won
    }
}

/// Fingerprints that are already on disk or claimed by a task.
#[derive(Debug, Default)]
pub struct FingerprintGuard {
    claimed: Mutex<HashMap<Fingerprint, Holder>>,
}

impl FingerprintGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks fingerprints found on disk as claimed. Takes `&mut self` so it
    /// cannot run once the guard is shared with fetch tasks.
    /// Returns how many were not already present.
    pub fn seed<I>(&mut self, fingerprints: I) -> usize
    where
        I: IntoIterator<Item = Fingerprint>,
    {
        let claimed = self
            .claimed
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        fingerprints
            .into_iter()
            .map(|fp| claimed.insert(fp, Holder::Disk).is_none())
            .filter(|inserted| *inserted)
            .count()
    }

    /// Claims `fp`. [`Claim::Won`] only for the first caller in this guard's
    /// lifetime; otherwise says whether the disk or another task holds it.
    pub fn claim(&self, fp: &Fingerprint) -> Claim {
        match self.lock().entry(fp.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(Holder::Task);
                Claim::Won
            }
            Entry::Occupied(held) => match held.get() {
                Holder::Disk => Claim::OnDisk,
                Holder::Task => Claim::Taken,
            },
        }
    }

    /// `claim(fp).is_won()`.
    pub fn try_claim(&self, fp: &Fingerprint) -> bool {
        self.claim(fp).is_won()
    }

    /// Number of fingerprints seeded or claimed so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Fingerprint, Holder>> {
        // A panic while holding the lock cannot leave the map half-updated.
        self.claimed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::title_fingerprint;
    use std::sync::{Arc, Barrier};

    #[test]
    fn seeded_fingerprint_cannot_be_claimed() {
        let seen = title_fingerprint("Talk B");
        let unseen = title_fingerprint("Talk C");
        let mut guard = FingerprintGuard::new();
        assert_eq!(guard.seed([seen.clone()]), 1);
        assert!(!guard.try_claim(&seen));
        assert!(guard.try_claim(&unseen));
    }

    #[test]
    fn second_claim_fails() {
        let guard = FingerprintGuard::new();
        let fp = title_fingerprint("x");
        assert!(guard.try_claim(&fp));
        assert!(!guard.try_claim(&fp));
        assert!(!guard.try_claim(&fp));
        assert_eq!(guard.len(), 1);
    }

    #[test]
    fn lost_claims_say_who_holds_the_fingerprint() {
        let on_disk = title_fingerprint("Talk B");
        let dup = title_fingerprint("Talk A");
        let mut guard = FingerprintGuard::new();
        guard.seed([on_disk.clone()]);
        assert_eq!(guard.claim(&on_disk), Claim::OnDisk);
        assert_eq!(guard.claim(&dup), Claim::Won);
        assert_eq!(guard.claim(&dup), Claim::Taken);
        // Losing never changes the holder.
        assert_eq!(guard.claim(&on_disk), Claim::OnDisk);
    }

    #[test]
    fn seed_counts_only_new_fingerprints() {
        let mut guard = FingerprintGuard::new();
        let a = title_fingerprint("a");
        let b = title_fingerprint("b");
        assert_eq!(guard.seed([a.clone(), a.clone(), b]), 2);
        assert_eq!(guard.seed([a]), 0);
        assert_eq!(guard.len(), 2);
        assert!(!guard.is_empty());
    }

    #[test]
    fn concurrent_claims_have_one_winner() {
        const THREADS: usize = 16;
        let guard = Arc::new(FingerprintGuard::new());
        let barrier = Arc::new(Barrier::new(THREADS));
        let fp = title_fingerprint("contended");

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let guard = Arc::clone(&guard);
                let barrier = Arc::clone(&barrier);
                let fp = fp.clone();
                std::thread::spawn(move || {
                    barrier.wait();
                    guard.try_claim(&fp)
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(winners, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_task_claims_have_one_winner() {
        let guard = Arc::new(FingerprintGuard::new());
        let fp = title_fingerprint("contended");
        let mut set = tokio::task::JoinSet::new();
        for _ in 0..64 {
            let guard = Arc::clone(&guard);
            let fp = fp.clone();
            set.spawn(async move { guard.try_claim(&fp) });
        }
        let mut winners = 0;
        while let Some(res) = set.join_next().await {
            if res.unwrap() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
    }
}
