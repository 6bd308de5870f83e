//! Persistent storage of the session credential.
use crate::constants::CREDENTIAL_KEY;
use gloo_storage::{LocalStorage, Storage};

/// Store for the bearer credential.
///
/// Wraps browser local storage, so the credential survives page reloads
/// within the same profile. At most one credential is held at a time;
/// absence means unauthenticated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialStore;

impl CredentialStore {
    /// Returns the stored credential.
    ///
    /// `None` when no credential is stored or storage is unavailable.
    pub fn read(&self) -> Option<String> {
        LocalStorage::get(CREDENTIAL_KEY).ok()
    }

    /// Persists the credential.
    pub fn save(&self, token: &str) {
        if let Err(err) = LocalStorage::set(CREDENTIAL_KEY, token) {
            tracing::debug!("could not store credential: {err:?}");
        }
    }

    /// Removes the stored credential.
    pub fn clear(&self) {
        LocalStorage::delete(CREDENTIAL_KEY);
    }
}
