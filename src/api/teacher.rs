//! Teacher directory for Zenbook
//!
//! Read-only access to the teachers sessions are assigned to. Detail
//! screens use this to resolve a session's `teacher_id` into a name.

use crate::api::{dispatch, read_json, ApiClient};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A teacher as the backend reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    /// Backend-assigned identifier
    pub id: i64,
    /// First name
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// Last name
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Server-assigned creation timestamp
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Server-assigned last-update timestamp
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Teacher {
    /// Display name composed from first and last name
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Teacher directory API
pub struct TeacherApi {
    client: ApiClient,
}

impl TeacherApi {
    /// Create the teacher API over a shared client
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all teachers
    pub async fn all(&self) -> Result<Vec<Teacher>> {
        tracing::debug!("Fetching all teachers");
        let response = dispatch(self.client.get("api/teacher")).await?;
        read_json(response).await
    }

    /// Fetch one teacher by id
    ///
    /// Fails with `NotFound` when the id does not resolve.
    pub async fn detail(&self, id: i64) -> Result<Teacher> {
        tracing::debug!("Fetching teacher with id={}", id);
        let response = dispatch(self.client.get(&format!("api/teacher/{}", id))).await?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_deserializes_backend_shape() {
        let json = r#"{
            "id": 5,
            "firstName": "Margot",
            "lastName": "Delahaye",
            "createdAt": "2024-01-01T08:00:00Z",
            "updatedAt": "2024-01-01T08:00:00Z"
        }"#;
        let teacher: Teacher = serde_json::from_str(json).expect("deserialize");
        assert_eq!(teacher.id, 5);
        assert_eq!(teacher.display_name(), "Margot Delahaye");
    }

    #[test]
    fn test_teacher_deserializes_without_timestamps() {
        let json = r#"{"id": 2, "firstName": "Helene", "lastName": "Thiercelin"}"#;
        let teacher: Teacher = serde_json::from_str(json).expect("deserialize");
        assert!(teacher.created_at.is_none());
        assert!(teacher.updated_at.is_none());
    }
}
