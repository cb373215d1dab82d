//! Authentication calls for Zenbook
//!
//! Exchanges credentials for an [`Identity`] and registers new accounts.
//! This module only talks to the backend; populating the identity store
//! with the returned identity is the caller's job, keeping the store's
//! single-writer discipline at the command layer.

use crate::api::{dispatch, read_empty, read_json, ApiClient};
use crate::error::Result;
use crate::identity::Identity;
use serde::Serialize;

/// Credentials submitted on login
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Plaintext password, forwarded verbatim over the transport
    pub password: String,
}

/// New-account submission
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    /// Account email, unique server-side
    pub email: String,
    /// First name
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// Last name
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Plaintext password
    pub password: String,
}

/// Authentication API
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    /// Create the authentication API over a shared client
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Authenticate against the backend
    ///
    /// Sends `POST /api/auth/login` and returns the identity the backend
    /// issued, token included. A rejected credential surfaces as
    /// `Unauthorized`.
    pub async fn login(&self, request: &LoginRequest) -> Result<Identity> {
        tracing::debug!("Authenticating user: {}", request.email);
        let response = dispatch(self.client.post("api/auth/login").json(request)).await?;
        let identity: Identity = read_json(response).await?;
        tracing::info!("Authenticated as {} (id={})", identity.username, identity.id);
        Ok(identity)
    }

    /// Register a new account
    ///
    /// Sends `POST /api/auth/register`; an already-taken email surfaces as
    /// `Conflict`.
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        tracing::debug!("Registering new user: {}", request.email);
        let response = dispatch(self.client.post("api/auth/register").json(request)).await?;
        read_empty(response).await
    }
}
