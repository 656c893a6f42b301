//! Fixed-length digest of a canonical title.

use sha2::{Digest, Sha256};
use std::fmt;

/// Identity token of a title: SHA-256 of the canonical string, lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Length of every fingerprint in hex characters.
    pub const LEN: usize = 64;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Digest over the UTF-8 bytes of `canonical`. Callers normalize first.
pub fn fingerprint(canonical: &str) -> Fingerprint {
    let digest = Sha256::digest(canonical.as_bytes());
    Fingerprint(hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_digest() {
        assert_eq!(
            fingerprint("").as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn known_digest() {
        assert_eq!(
            fingerprint("hello").as_str(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn fixed_width_and_stable() {
        let a = fingerprint("talka");
        let b = fingerprint("talka");
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), Fingerprint::LEN);
        assert_eq!(fingerprint("x").to_string().len(), Fingerprint::LEN);
    }
}
