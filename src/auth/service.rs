//! Authentication service
//!
//! Orchestrates validation, lookup and comparison. The service owns no state
//! beyond its lookup capability, verifier and length policy.

use crate::auth::policy::{LengthPolicy, validate_required};
use crate::auth::results::AuthSuccess;
use crate::auth::verifier::{CredentialVerifier, PlaintextVerifier};
use crate::error::AuthError;
use crate::store::UserLookup;

/// Checks identity/secret pairs against a [`UserLookup`].
///
/// Failures carry distinct kinds so calling code can decide how much to
/// reveal; see [`crate::error::handlers::user_message`].
#[derive(Debug, Clone)]
pub struct AuthService<L, V = PlaintextVerifier> {
    lookup: L,
    verifier: V,
    length_policy: LengthPolicy,
}

impl<L: UserLookup> AuthService<L> {
    /// Creates a service with plaintext comparison and the default length limits.
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            verifier: PlaintextVerifier,
            length_policy: LengthPolicy::default(),
        }
    }
}

impl<L: UserLookup, V: CredentialVerifier> AuthService<L, V> {
    /// Replaces the comparison strategy.
    pub fn with_verifier<W: CredentialVerifier>(self, verifier: W) -> AuthService<L, W> {
        AuthService {
            lookup: self.lookup,
            verifier,
            length_policy: self.length_policy,
        }
    }

    pub fn with_length_policy(mut self, length_policy: LengthPolicy) -> Self {
        self.length_policy = length_policy;
        self
    }

    /// Runs the input checks in order: emptiness, then length.
    pub fn validate_input(&self, identity: &str, secret: &str) -> Result<(), AuthError> {
        validate_required(identity, secret)?;
        self.length_policy.check(identity, secret)
    }

    /// Authenticates `identity` with `secret`.
    ///
    /// Stops at the first failure. The store is only queried once the input
    /// has passed validation.
    pub fn authenticate(&self, identity: &str, secret: &str) -> Result<AuthSuccess, AuthError> {
        self.validate_input(identity, secret)?;

        let record = self.lookup.find(identity)?;

        if !self.verifier.verify(record.secret(), secret) {
            return Err(AuthError::InvalidCredential);
        }

        Ok(AuthSuccess::from(&record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use crate::store::{InMemoryUserStore, UserRecord, default_seeds};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn service() -> AuthService<InMemoryUserStore> {
        AuthService::new(InMemoryUserStore::from_seeds(&default_seeds()).unwrap())
    }

    /// Fails the test if the service ever reaches the store.
    struct UnreachableLookup;

    impl UserLookup for UnreachableLookup {
        fn find(&self, name: &str) -> Result<UserRecord, LookupError> {
            panic!("store queried for {name:?} despite invalid input");
        }
    }

    #[derive(Default)]
    struct CountingLookup {
        calls: AtomicUsize,
    }

    impl UserLookup for CountingLookup {
        fn find(&self, name: &str) -> Result<UserRecord, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(LookupError::NotFound(name.to_string()))
        }
    }

    struct AcceptAll;

    impl CredentialVerifier for AcceptAll {
        fn verify(&self, _stored: &str, _supplied: &str) -> bool {
            true
        }
    }

    #[test]
    fn valid_credentials_succeed() {
        let success = service().authenticate("joao", "1234").unwrap();
        assert_eq!(success.user_id, 1);
        assert_eq!(success.username, "joao");
    }

    #[test]
    fn wrong_secret_is_invalid_credential() {
        assert_eq!(
            service().authenticate("joao", "wrong"),
            Err(AuthError::InvalidCredential)
        );
    }

    #[test]
    fn secret_comparison_is_case_sensitive() {
        let store = InMemoryUserStore::from_records([UserRecord::new(7, "ana", "Secret")]).unwrap();
        let service = AuthService::new(store);
        assert_eq!(
            service.authenticate("ana", "secret"),
            Err(AuthError::InvalidCredential)
        );
        assert!(service.authenticate("ana", "Secret").is_ok());
    }

    #[test]
    fn unknown_user_is_not_found() {
        assert_eq!(
            service().authenticate("maria", "1234"),
            Err(AuthError::UserNotFound)
        );
    }

    #[test]
    fn empty_input_never_reaches_store() {
        let service = AuthService::new(UnreachableLookup);
        assert_eq!(service.authenticate("", "1234"), Err(AuthError::ValueRequired));
        assert_eq!(service.authenticate("joao", ""), Err(AuthError::ValueRequired));
        assert_eq!(service.authenticate("", ""), Err(AuthError::ValueRequired));
    }

    #[test]
    fn overlong_input_never_reaches_store() {
        let service = AuthService::new(UnreachableLookup);
        assert_eq!(
            service.authenticate(&"a".repeat(101), "1234"),
            Err(AuthError::LengthExceeded)
        );
        assert_eq!(
            service.authenticate("joao", &"1".repeat(15)),
            Err(AuthError::LengthExceeded)
        );
    }

    #[test]
    fn emptiness_is_checked_before_length() {
        let service = AuthService::new(UnreachableLookup);
        assert_eq!(
            service.authenticate(&"a".repeat(101), ""),
            Err(AuthError::ValueRequired)
        );
    }

    #[test]
    fn disabled_length_policy_allows_long_input() {
        let lookup = CountingLookup::default();
        let service = AuthService::new(&lookup).with_length_policy(LengthPolicy::Disabled);
        assert_eq!(
            service.authenticate(&"a".repeat(101), &"1".repeat(15)),
            Err(AuthError::UserNotFound)
        );
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn valid_input_queries_store_once() {
        let lookup = CountingLookup::default();
        let service = AuthService::new(&lookup);
        let _ = service.authenticate("joao", "1234");
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn verifier_can_be_replaced() {
        let service = service().with_verifier(AcceptAll);
        assert!(service.authenticate("joao", "anything").is_ok());
        // validation still runs first
        assert_eq!(
            service.authenticate("joao", ""),
            Err(AuthError::ValueRequired)
        );
    }

    #[test]
    fn repeated_calls_agree() {
        let service = service();
        for (identity, secret) in [("joao", "1234"), ("joao", "wrong"), ("maria", "1234"), ("", "1")] {
            assert_eq!(
                service.authenticate(identity, secret),
                service.authenticate(identity, secret)
            );
        }
    }
}
