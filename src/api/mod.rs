//! HTTP API modules for Zenbook
//!
//! This module contains the shared HTTP client plumbing and one submodule
//! per backend resource: authentication, bookable sessions, the teacher
//! directory, and user accounts.

pub mod auth;
pub mod session;
pub mod teacher;
pub mod user;

pub use auth::{AuthApi, LoginRequest, RegisterRequest};
pub use session::{Session, SessionApi, SessionDraft};
pub use teacher::{Teacher, TeacherApi};
pub use user::{User, UserApi};

use crate::config::ApiConfig;
use crate::error::{Result, ZenbookError};
use crate::identity::IdentityStore;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Shared HTTP client for the booking backend
///
/// Owns the `reqwest` client, the backend base URL, and a handle to the
/// [`IdentityStore`] so that authenticated requests carry the current
/// credential automatically. Cloning is cheap; all clones share the same
/// connection pool and identity store.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use zenbook::api::{ApiClient, SessionApi};
/// use zenbook::config::ApiConfig;
/// use zenbook::identity::IdentityStore;
///
/// # async fn example() -> zenbook::error::Result<()> {
/// let identity = Arc::new(IdentityStore::new());
/// let client = ApiClient::new(&ApiConfig::default(), identity)?;
/// let sessions = SessionApi::new(client);
/// let all = sessions.all().await?;
/// println!("{} sessions scheduled", all.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    identity: Arc<IdentityStore>,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Arguments
    ///
    /// * `config` - Backend location and request timeout
    /// * `identity` - Store supplying the credential for authenticated calls
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    pub fn new(config: &ApiConfig, identity: Arc<IdentityStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("zenbook/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ZenbookError::Config(format!("Failed to create HTTP client: {}", e)))?;

        tracing::debug!("Initialized API client: base_url={}", config.base_url);

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            identity,
        })
    }

    /// The identity store backing authenticated requests
    pub fn identity(&self) -> &IdentityStore {
        &self.identity
    }

    /// Build a request for the given path, attaching the current credential
    /// when logged in
    ///
    /// The credential is read at call time, so a request started before a
    /// logout still carries the token it was built with; the store is never
    /// mutated from here.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path);
        let builder = self.http.request(method, &url);
        match self.identity.current() {
            Some(identity) => builder.header(
                AUTHORIZATION,
                format!("{} {}", identity.token_type, identity.token),
            ),
            None => builder,
        }
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }
}

/// Dispatch a request and surface transport failures as server errors
///
/// The core performs exactly one attempt per invocation; there is no retry
/// or request coalescing, so two rapid identical calls produce two backend
/// requests.
pub(crate) async fn dispatch(builder: RequestBuilder) -> Result<Response> {
    builder.send().await.map_err(|e| {
        tracing::warn!("Request to booking backend failed: {}", e);
        ZenbookError::Server(format!("request failed: {}", e)).into()
    })
}

/// Parse a JSON success body, mapping non-success statuses to error kinds
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        return Err(ZenbookError::from_status(status, detail).into());
    }
    response.json::<T>().await.map_err(|e| ZenbookError::Http(e).into())
}

/// Accept an empty success body, mapping non-success statuses to error kinds
pub(crate) async fn read_empty(response: Response) -> Result<()> {
    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        return Err(ZenbookError::from_status(status, detail).into());
    }
    Ok(())
}
