//! Authentication command handlers
//!
//! Login populates the identity store and persists the identity to the OS
//! keyring so later invocations stay authenticated; logout clears both.

use crate::api::{AuthApi, LoginRequest, RegisterRequest};
use crate::credentials::CredentialStore;
use crate::error::Result;
use crate::identity::IdentityStore;
use colored::Colorize;

/// Log in and persist the returned identity
pub async fn run_login(
    auth: &AuthApi,
    identity: &IdentityStore,
    credentials: &CredentialStore,
    email: String,
    password: String,
) -> Result<()> {
    let request = LoginRequest { email, password };
    let logged_in = auth.login(&request).await?;

    identity.log_in(logged_in.clone());
    credentials.save(&logged_in)?;

    println!("{} {}", "Logged in as".green(), logged_in.display_name());
    if logged_in.admin {
        println!("{}", "You have administrator rights".yellow());
    }
    Ok(())
}

/// Log out and discard the stored credential
///
/// Safe to run when already logged out.
pub fn run_logout(identity: &IdentityStore, credentials: &CredentialStore) -> Result<()> {
    identity.log_out();
    credentials.delete()?;
    println!("{}", "Logged out".green());
    Ok(())
}

/// Register a new account
pub async fn run_register(
    auth: &AuthApi,
    email: String,
    first_name: String,
    last_name: String,
    password: String,
) -> Result<()> {
    let request = RegisterRequest {
        email,
        first_name,
        last_name,
        password,
    };
    auth.register(&request).await?;
    println!("{}", "Account created, you can now log in".green());
    Ok(())
}

/// Show the currently logged-in identity
pub fn run_whoami(identity: &IdentityStore) -> Result<()> {
    match identity.current() {
        Some(current) => {
            println!("{} ({})", current.display_name(), current.username);
            if current.admin {
                println!("{}", "administrator".yellow());
            }
        }
        None => println!("Not logged in"),
    }
    Ok(())
}
