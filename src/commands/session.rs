//! Session command handlers
//!
//! Browsing is open to any authenticated user; create/update/delete are
//! only offered to administrators. The offer-side gating lives here, in
//! the view layer; the workflow itself dispatches whatever it is asked
//! to and lets the backend have the final word.

use crate::api::{SessionApi, SessionDraft, TeacherApi};
use crate::error::{Result, ZenbookError};
use crate::identity::IdentityStore;
use colored::Colorize;
use prettytable::{row, Table};

/// List all scheduled sessions as a table
pub async fn run_list(sessions: &SessionApi) -> Result<()> {
    let all = sessions.all().await?;

    if all.is_empty() {
        println!("No sessions scheduled");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["ID", "NAME", "DATE", "TEACHER", "ATTENDEES"]);
    for session in &all {
        table.add_row(row![
            session
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            session.name,
            session.date,
            session.teacher_id,
            session.users.len()
        ]);
    }
    table.printstd();
    Ok(())
}

/// Show one session in detail, resolving the teacher's name
pub async fn run_show(
    sessions: &SessionApi,
    teachers: &TeacherApi,
    identity: &IdentityStore,
    id: i64,
) -> Result<()> {
    let session = sessions.detail(id).await?;

    // Best-effort name resolution; the session is still shown when the
    // teacher record is missing.
    let teacher_name = match teachers.detail(session.teacher_id).await {
        Ok(teacher) => teacher.display_name(),
        Err(e) => {
            tracing::debug!("Could not resolve teacher {}: {}", session.teacher_id, e);
            format!("teacher #{}", session.teacher_id)
        }
    };

    println!("{}", session.name.bold());
    println!("Date:        {}", session.date);
    println!("Teacher:     {}", teacher_name);
    println!("Attendees:   {}", session.users.len());
    println!();
    println!("{}", session.description);

    if let Some(current) = identity.current() {
        if session.users.contains(&current.id) {
            println!();
            println!("{}", "You are registered for this session".green());
        }
    }
    Ok(())
}

/// Create a session (offered to administrators only)
pub async fn run_create(
    sessions: &SessionApi,
    identity: &IdentityStore,
    draft: SessionDraft,
) -> Result<()> {
    require_admin(identity, "create")?;
    let created = sessions.create(&draft).await?;
    println!(
        "{} {} (id {})",
        "Session created:".green(),
        created.name,
        created.id.unwrap_or_default()
    );
    Ok(())
}

/// Update a session (offered to administrators only)
pub async fn run_update(
    sessions: &SessionApi,
    identity: &IdentityStore,
    id: i64,
    draft: SessionDraft,
) -> Result<()> {
    require_admin(identity, "update")?;
    let updated = sessions.update(id, &draft).await?;
    println!("{} {}", "Session updated:".green(), updated.name);
    Ok(())
}

/// Delete a session (offered to administrators only)
pub async fn run_delete(sessions: &SessionApi, identity: &IdentityStore, id: i64) -> Result<()> {
    require_admin(identity, "delete")?;
    sessions.delete(id).await?;
    println!("{}", "Session deleted".green());
    Ok(())
}

/// Join a session roster
///
/// Defaults to the logged-in user; an explicit `--user` supports
/// admin-assisted registration.
pub async fn run_join(
    sessions: &SessionApi,
    identity: &IdentityStore,
    id: i64,
    user: Option<i64>,
) -> Result<()> {
    let user_id = resolve_user(identity, user)?;
    sessions.participate(id, user_id).await?;
    println!("{} {}", "Joined session".green(), id);
    Ok(())
}

/// Leave a session roster
pub async fn run_leave(
    sessions: &SessionApi,
    identity: &IdentityStore,
    id: i64,
    user: Option<i64>,
) -> Result<()> {
    let user_id = resolve_user(identity, user)?;
    sessions.unparticipate(id, user_id).await?;
    println!("{} {}", "Left session".green(), id);
    Ok(())
}

/// Offer-side privilege gate for the administrator commands
fn require_admin(identity: &IdentityStore, operation: &str) -> Result<()> {
    if identity.is_admin() {
        return Ok(());
    }
    Err(ZenbookError::Unauthorized(format!(
        "administrator rights are required to {} sessions",
        operation
    ))
    .into())
}

/// Resolve the roster user id from the flag or the logged-in identity
///
/// Acting on another user's behalf is admin-assisted registration and is
/// only offered to administrators; members always act as themselves.
fn resolve_user(identity: &IdentityStore, user: Option<i64>) -> Result<i64> {
    let current = identity.current().ok_or_else(|| {
        anyhow::Error::from(ZenbookError::Unauthorized(
            "log in before joining or leaving a session".to_string(),
        ))
    })?;

    match user {
        Some(user_id) if user_id != current.id && !current.admin => {
            Err(ZenbookError::Unauthorized(
                "only administrators can register another user".to_string(),
            )
            .into())
        }
        Some(user_id) => Ok(user_id),
        None => Ok(current.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Identity;

    fn identity(id: i64, admin: bool) -> Identity {
        Identity {
            id,
            username: "user@studio.example".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            admin,
            token: "jwt".to_string(),
            token_type: "Bearer".to_string(),
        }
    }

    #[test]
    fn test_require_admin_rejects_anonymous() {
        let store = IdentityStore::new();
        assert!(require_admin(&store, "create").is_err());
    }

    #[test]
    fn test_require_admin_rejects_member() {
        let store = IdentityStore::new();
        store.log_in(identity(1, false));
        assert!(require_admin(&store, "delete").is_err());
    }

    #[test]
    fn test_require_admin_accepts_admin() {
        let store = IdentityStore::new();
        store.log_in(identity(1, true));
        assert!(require_admin(&store, "update").is_ok());
    }

    #[test]
    fn test_resolve_user_allows_admin_assisted_registration() {
        let store = IdentityStore::new();
        store.log_in(identity(1, true));
        assert_eq!(resolve_user(&store, Some(9)).unwrap(), 9);
    }

    #[test]
    fn test_resolve_user_rejects_member_acting_for_another_user() {
        let store = IdentityStore::new();
        store.log_in(identity(1, false));
        assert!(resolve_user(&store, Some(9)).is_err());
    }

    #[test]
    fn test_resolve_user_allows_member_naming_themselves() {
        let store = IdentityStore::new();
        store.log_in(identity(4, false));
        assert_eq!(resolve_user(&store, Some(4)).unwrap(), 4);
    }

    #[test]
    fn test_resolve_user_falls_back_to_current_identity() {
        let store = IdentityStore::new();
        store.log_in(identity(4, false));
        assert_eq!(resolve_user(&store, None).unwrap(), 4);
    }

    #[test]
    fn test_resolve_user_requires_login() {
        let store = IdentityStore::new();
        assert!(resolve_user(&store, None).is_err());
    }
}
