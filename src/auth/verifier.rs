//! Credential comparison
//!
//! The comparison step sits behind [`CredentialVerifier`] so a salted-hash
//! strategy can replace plaintext equality without changing the service.

/// Decides whether a supplied secret matches the stored one.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, stored: &str, supplied: &str) -> bool;
}

/// Exact, case-sensitive, byte-for-byte equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    #[inline]
    fn verify(&self, stored: &str, supplied: &str) -> bool {
        stored.as_bytes() == supplied.as_bytes()
    }
}
