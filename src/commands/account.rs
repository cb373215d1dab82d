//! Account command handlers
//!
//! Both commands operate on the logged-in account only; account deletion
//! also logs out and discards the stored credential, since the identity
//! it referred to no longer exists.

use crate::api::UserApi;
use crate::credentials::CredentialStore;
use crate::error::{Result, ZenbookError};
use crate::identity::{Identity, IdentityStore};
use colored::Colorize;

/// Show the logged-in account's details
pub async fn run_show(users: &UserApi, identity: &IdentityStore) -> Result<()> {
    let current = require_login(identity)?;
    let user = users.detail(current.id).await?;

    println!("{} ({})", user.first_name, user.email);
    println!("Name:    {} {}", user.first_name, user.last_name);
    if user.admin {
        println!("Role:    {}", "administrator".yellow());
    }
    if let Some(created_at) = user.created_at {
        println!("Member since: {}", created_at.date_naive());
    }
    Ok(())
}

/// Delete the logged-in account, then log out
pub async fn run_delete(
    users: &UserApi,
    identity: &IdentityStore,
    credentials: &CredentialStore,
) -> Result<()> {
    let current = require_login(identity)?;
    users.delete(current.id).await?;

    identity.log_out();
    credentials.delete()?;

    println!("{}", "Account deleted".green());
    Ok(())
}

fn require_login(identity: &IdentityStore) -> Result<Identity> {
    identity.current().ok_or_else(|| {
        ZenbookError::Unauthorized("log in to manage your account".to_string()).into()
    })
}
