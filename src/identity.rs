//! Authenticated identity state for Zenbook
//!
//! This module holds the process-wide record of who is currently logged in.
//! The [`IdentityStore`] is the single source of truth consumed by every
//! command handler: it exposes a synchronous snapshot of the current
//! identity and a live login-state stream with replay-latest semantics, so
//! a subscriber attaching at any point immediately observes the current
//! value.

use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use tokio::sync::watch;

/// The authenticated principal
///
/// Produced by a successful login call and held by the [`IdentityStore`]
/// for the lifetime of the login. The token fields are opaque credentials
/// forwarded on subsequent authenticated requests; they are never inspected
/// client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Backend-assigned user id, stable for the login lifetime
    pub id: i64,
    /// Login name (the account email); some backend builds emit it as `email`
    #[serde(alias = "email")]
    pub username: String,
    /// First name, presentation only
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// Last name, presentation only
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Administrator flag; grants create/edit/delete on sessions
    pub admin: bool,
    /// Opaque credential forwarded on authenticated calls
    pub token: String,
    /// Credential scheme, typically `"Bearer"`
    #[serde(rename = "type", default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl Identity {
    /// Display name composed from first and last name
    ///
    /// # Examples
    ///
    /// ```
    /// use zenbook::identity::Identity;
    ///
    /// let identity = Identity {
    ///     id: 1,
    ///     username: "jane@studio.example".to_string(),
    ///     first_name: "Jane".to_string(),
    ///     last_name: "Doe".to_string(),
    ///     admin: false,
    ///     token: "jwt".to_string(),
    ///     token_type: "Bearer".to_string(),
    /// };
    /// assert_eq!(identity.display_name(), "Jane Doe");
    /// ```
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Single authoritative in-memory record of the current authenticated
/// identity, with a reactive notification channel.
///
/// The store holds at most one identity at a time. `log_in` and `log_out`
/// are the only writer paths; everything else reads. The login-state
/// stream is a `tokio::sync::watch` channel seeded with `false`: every
/// receiver sees the latest value immediately via `borrow()` and is
/// notified of each subsequent transition via `changed()`. Emissions are
/// delivered even when the value does not change, so a `log_out` while
/// already logged out still notifies subscribers.
pub struct IdentityStore {
    current: RwLock<Option<Identity>>,
    logged_in_tx: watch::Sender<bool>,
}

impl IdentityStore {
    /// Create a store in the anonymous state
    ///
    /// The login stream starts at `false`, so subscribers attaching before
    /// any `log_in` call observe a definite logged-out value rather than
    /// nothing.
    pub fn new() -> Self {
        let (logged_in_tx, _) = watch::channel(false);
        Self {
            current: RwLock::new(None),
            logged_in_tx,
        }
    }

    /// Record a successful authentication
    ///
    /// Replaces any existing identity unconditionally in a single
    /// transition; there is no intermediate anonymous state when one login
    /// supersedes another. Emits `true` on the login stream.
    pub fn log_in(&self, identity: Identity) {
        tracing::debug!("identity store: logging in user id={}", identity.id);
        {
            let mut slot = self.current.write().unwrap_or_else(|e| e.into_inner());
            *slot = Some(identity);
        }
        self.logged_in_tx.send_replace(true);
    }

    /// Clear the current identity
    ///
    /// Idempotent: calling while already logged out leaves the state
    /// unchanged but still emits `false` to subscribers.
    pub fn log_out(&self) {
        tracing::debug!("identity store: logging out");
        {
            let mut slot = self.current.write().unwrap_or_else(|e| e.into_inner());
            *slot = None;
        }
        self.logged_in_tx.send_replace(false);
    }

    /// Subscribe to the live login-state stream
    ///
    /// The returned receiver observes the current value immediately via
    /// `borrow()` and every subsequent transition via `changed()`, for the
    /// lifetime of the store. Any number of receivers may exist at once.
    pub fn logged_in(&self) -> watch::Receiver<bool> {
        self.logged_in_tx.subscribe()
    }

    /// Synchronous snapshot of the current identity, if any
    pub fn current(&self) -> Option<Identity> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Whether the current identity carries the administrator flag
    ///
    /// Returns `false` when logged out. This is a UX affordance for
    /// deciding which actions to offer; the backend remains the authority
    /// on privileged operations.
    pub fn is_admin(&self) -> bool {
        self.current().map(|identity| identity.admin).unwrap_or(false)
    }
}

impl Default for IdentityStore {
    fn default() -> Self {
        Self::new()
    }
}
