//! User account calls for Zenbook
//!
//! Account detail and account deletion, backing the "my account" command.
//! Deleting the authenticated account is followed by a logout at the
//! command layer; this module only performs the calls.

use crate::api::{dispatch, read_empty, read_json, ApiClient};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user account as the backend reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned identifier
    pub id: i64,
    /// Account email
    pub email: String,
    /// First name
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// Last name
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Administrator flag
    #[serde(default)]
    pub admin: bool,
    /// Server-assigned creation timestamp
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Server-assigned last-update timestamp
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// User account API
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    /// Create the user API over a shared client
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch one user by id
    ///
    /// Fails with `NotFound` when the id does not resolve.
    pub async fn detail(&self, id: i64) -> Result<User> {
        tracing::debug!("Fetching user with id={}", id);
        let response = dispatch(self.client.get(&format!("api/user/{}", id))).await?;
        read_json(response).await
    }

    /// Delete a user account
    pub async fn delete(&self, id: i64) -> Result<()> {
        tracing::debug!("Deleting user with id={}", id);
        let response = dispatch(self.client.delete(&format!("api/user/{}", id))).await?;
        read_empty(response).await
    }
}
