//! Session booking workflow for Zenbook
//!
//! This module mediates every session-resource operation: listing and
//! detail reads, create/update/delete for administrators, and the
//! join/leave roster toggle. Drafts are validated locally before any
//! request is sent; privilege is re-checked against the identity store as
//! a convenience, with the backend remaining the real authority. The
//! workflow issues exactly one backend call per invocation and adds no
//! retry, debouncing, or deduplication: repeated join/leave calls are safe
//! because the backend contract is idempotent, not because the client
//! suppresses them.

use crate::api::{dispatch, read_empty, read_json, ApiClient};
use crate::error::{Result, ZenbookError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A bookable session as the backend reports it
///
/// `id`, `createdAt`, and `updatedAt` are server-assigned. `users` is the
/// roster of joined user ids in the order the backend stores them; the
/// backend guarantees it holds no duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Backend-assigned identifier; absent on a draft not yet created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Session title
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Calendar date the session takes place
    pub date: NaiveDate,
    /// Teacher running the session
    pub teacher_id: i64,
    /// Ids of users currently joined, insertion order
    #[serde(default)]
    pub users: Vec<i64>,
    /// Server-assigned creation timestamp
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Server-assigned last-update timestamp
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Form-level input for creating or updating a session
///
/// Fields arrive as the user typed them; [`SessionDraft`] is validated
/// into a wire payload before dispatch and never sent raw.
#[derive(Debug, Clone, Default)]
pub struct SessionDraft {
    /// Session title, required non-empty
    pub name: String,
    /// Session date as `YYYY-MM-DD`, must parse
    pub date: String,
    /// Teacher running the session, required
    pub teacher_id: Option<i64>,
    /// Free-text description, required non-empty
    pub description: String,
}

/// The exact wire body for create/update: the validated draft fields and
/// nothing else.
#[derive(Debug, Clone, Serialize)]
struct SessionPayload {
    name: String,
    date: NaiveDate,
    teacher_id: i64,
    description: String,
}

impl SessionDraft {
    /// Validate the draft into a dispatchable payload
    ///
    /// Checks the rules the backend would reject anyway, so bad drafts
    /// never leave the process: name and description non-empty after
    /// trimming, a teacher selected, and a parseable date.
    fn validated(&self) -> std::result::Result<SessionPayload, ZenbookError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ZenbookError::Validation("name must not be empty".to_string()));
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(ZenbookError::Validation(
                "description must not be empty".to_string(),
            ));
        }

        let teacher_id = self.teacher_id.ok_or_else(|| {
            ZenbookError::Validation("a teacher must be selected".to_string())
        })?;

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            ZenbookError::Validation(format!(
                "date must be a valid YYYY-MM-DD date, got: {}",
                self.date
            ))
        })?;

        Ok(SessionPayload {
            name: name.to_string(),
            date,
            teacher_id,
            description: description.to_string(),
        })
    }
}

/// Session booking API
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use zenbook::api::{ApiClient, SessionApi, SessionDraft};
/// use zenbook::config::ApiConfig;
/// use zenbook::identity::IdentityStore;
///
/// # async fn example() -> zenbook::error::Result<()> {
/// let client = ApiClient::new(&ApiConfig::default(), Arc::new(IdentityStore::new()))?;
/// let sessions = SessionApi::new(client);
///
/// let draft = SessionDraft {
///     name: "Morning Yoga".to_string(),
///     date: "2026-09-01".to_string(),
///     teacher_id: Some(5),
///     description: "Sun salutations to start the day".to_string(),
/// };
/// let created = sessions.create(&draft).await?;
/// println!("created session {:?}", created.id);
/// # Ok(())
/// # }
/// ```
pub struct SessionApi {
    client: ApiClient,
}

impl SessionApi {
    /// Create the session API over a shared client
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Privilege re-check for mutating operations
    ///
    /// Client-side gating is a UX affordance only: a non-admin invocation
    /// is logged and still dispatched, and the backend's 401/403 answer is
    /// what actually stops it.
    fn warn_if_not_admin(&self, operation: &str) {
        if !self.client.identity().is_admin() {
            tracing::warn!(
                "{} requested without administrator rights; deferring to server enforcement",
                operation
            );
        }
    }

    /// Fetch all sessions
    pub async fn all(&self) -> Result<Vec<Session>> {
        tracing::debug!("Fetching all sessions");
        let response = dispatch(self.client.get("api/session")).await?;
        read_json(response).await
    }

    /// Fetch one session by id
    ///
    /// Fails with `NotFound` when the id does not resolve.
    pub async fn detail(&self, id: i64) -> Result<Session> {
        tracing::debug!("Fetching session with id={}", id);
        let response = dispatch(self.client.get(&format!("api/session/{}", id))).await?;
        read_json(response).await
    }

    /// Create a session from a validated draft
    ///
    /// Administrator operation. Validation failures are returned before
    /// any request is sent; the backend's authoritative copy of the new
    /// session is returned on success.
    pub async fn create(&self, draft: &SessionDraft) -> Result<Session> {
        let payload = draft.validated()?;
        self.warn_if_not_admin("create");
        tracing::debug!("Creating session: {}", payload.name);
        let response = dispatch(self.client.post("api/session").json(&payload)).await?;
        read_json(response).await
    }

    /// Update an existing session from a validated draft
    ///
    /// Same validation and privilege rules as [`SessionApi::create`].
    pub async fn update(&self, id: i64, draft: &SessionDraft) -> Result<Session> {
        let payload = draft.validated()?;
        self.warn_if_not_admin("update");
        tracing::debug!("Updating session id={}", id);
        let response = dispatch(
            self.client.put(&format!("api/session/{}", id)).json(&payload),
        )
        .await?;
        read_json(response).await
    }

    /// Delete a session
    ///
    /// Administrator operation; fails with `NotFound` when the id no
    /// longer exists server-side.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.warn_if_not_admin("delete");
        tracing::debug!("Deleting session with id={}", id);
        let response = dispatch(self.client.delete(&format!("api/session/{}", id))).await?;
        read_empty(response).await
    }

    /// Join a session roster
    ///
    /// The explicit `user_id` supports admin-assisted registration; from
    /// the normal flow callers pass the current identity's id. The call is
    /// idempotent at the protocol level: a repeat the backend accepts is
    /// success, and no duplicate roster entry results.
    pub async fn participate(&self, id: i64, user_id: i64) -> Result<()> {
        tracing::debug!("User {} joining session {}", user_id, id);
        let response = dispatch(
            self.client
                .post(&format!("api/session/{}/participate/{}", id, user_id)),
        )
        .await?;
        read_empty(response).await
    }

    /// Leave a session roster
    ///
    /// Symmetric to [`SessionApi::participate`]. Leaving a session the
    /// user is not on is not a blocking failure: a backend 404 is logged
    /// and reported as success, while every other rejection surfaces
    /// normally.
    pub async fn unparticipate(&self, id: i64, user_id: i64) -> Result<()> {
        tracing::debug!("User {} leaving session {}", user_id, id);
        let response = dispatch(
            self.client
                .delete(&format!("api/session/{}/participate/{}", id, user_id)),
        )
        .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(
                "User {} was not on the roster of session {}; treating leave as a no-op",
                user_id,
                id
            );
            return Ok(());
        }

        read_empty(response).await
    }
}
