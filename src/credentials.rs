//! Identity persistence via OS keyring
//!
//! This module stores the authenticated identity in the operating system's
//! native credential store (Keychain on macOS, Secret Service on Linux,
//! Windows Credential Manager on Windows) so that a login survives across
//! CLI invocations.
//!
//! The identity is serialized to JSON before storage and deserialized on
//! load. The keyring is stateless; [`CredentialStore`] is a zero-field
//! struct that acts as a namespaced accessor.

use crate::error::{Result, ZenbookError};
use crate::identity::Identity;

/// Stateless accessor for the OS native keyring.
///
/// The stored record is keyed by a fixed service name so that at most one
/// identity exists at a time, matching the single-account model of the
/// identity store.
///
/// # Examples
///
/// ```no_run
/// use zenbook::credentials::CredentialStore;
///
/// let store = CredentialStore;
/// match store.load().unwrap() {
///     Some(identity) => println!("logged in as {}", identity.display_name()),
///     None => println!("not logged in"),
/// }
/// ```
pub struct CredentialStore;

const SERVICE: &str = "zenbook";
const ACCOUNT: &str = "current-identity";

impl CredentialStore {
    /// Persists the authenticated identity.
    ///
    /// The identity is serialized to JSON and stored in the OS keyring,
    /// replacing any previously stored record.
    ///
    /// # Errors
    ///
    /// Returns [`ZenbookError::Serialization`] if JSON serialization fails
    /// or [`ZenbookError::Keyring`] if the OS credential store rejects the
    /// write.
    pub fn save(&self, identity: &Identity) -> Result<()> {
        let json_str = serde_json::to_string(identity)?;
        let entry = keyring::Entry::new(SERVICE, ACCOUNT).map_err(ZenbookError::Keyring)?;
        entry.set_password(&json_str).map_err(ZenbookError::Keyring)?;
        tracing::debug!("credential store: saved identity id={}", identity.id);
        Ok(())
    }

    /// Loads the stored identity.
    ///
    /// Returns `Ok(None)` when no identity has been saved, allowing callers
    /// to distinguish between "not logged in" and a genuine keyring error.
    ///
    /// # Errors
    ///
    /// Returns [`ZenbookError::Keyring`] if the OS credential store returns
    /// an unexpected error, or [`ZenbookError::Serialization`] if the
    /// stored JSON is malformed.
    pub fn load(&self) -> Result<Option<Identity>> {
        let entry = keyring::Entry::new(SERVICE, ACCOUNT).map_err(ZenbookError::Keyring)?;

        match entry.get_password() {
            Ok(json_str) => {
                let identity: Identity = serde_json::from_str(&json_str)?;
                Ok(Some(identity))
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(ZenbookError::Keyring(e).into()),
        }
    }

    /// Deletes the stored identity.
    ///
    /// This is a no-op when nothing is stored, so it is safe to call on
    /// logout regardless of whether a login was persisted.
    ///
    /// # Errors
    ///
    /// Returns [`ZenbookError::Keyring`] if the OS credential store returns
    /// an unexpected error.
    pub fn delete(&self) -> Result<()> {
        let entry = keyring::Entry::new(SERVICE, ACCOUNT).map_err(ZenbookError::Keyring)?;

        match entry.delete_password() {
            Ok(()) => {
                tracing::debug!("credential store: deleted stored identity");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(ZenbookError::Keyring(e).into()),
        }
    }
}
