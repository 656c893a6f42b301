//! Title identity.
//!
//! Titles are the only key a playlist entry carries, and they reach us twice:
//! once from the remote catalog and once rebuilt from a saved filename. Both
//! are reduced to a canonical string and then to a fixed-length fingerprint,
//! which is what every dedup decision compares.

mod fingerprint;
mod normalize;

pub use fingerprint::{fingerprint, Fingerprint};
pub use normalize::normalize;

/// Fingerprint of a display title: `fingerprint(normalize(title))`.
pub fn title_fingerprint(title: &str) -> Fingerprint {
    fingerprint(&normalize(title))
}
