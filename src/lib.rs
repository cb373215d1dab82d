//! Zenbook - studio session booking client library
//!
//! This library provides the core functionality for the Zenbook CLI: the
//! authenticated identity store, typed API clients for the booking
//! backend, credential persistence, and configuration.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `identity`: the process-wide identity store with a live login stream
//! - `api`: HTTP clients for auth, sessions, teachers, and user accounts
//! - `credentials`: keyring persistence of the logged-in identity
//! - `commands`: CLI command handlers consuming the above
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use zenbook::api::{ApiClient, SessionApi};
//! use zenbook::config::ApiConfig;
//! use zenbook::identity::IdentityStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let identity = Arc::new(IdentityStore::new());
//!     let client = ApiClient::new(&ApiConfig::default(), identity)?;
//!     let sessions = SessionApi::new(client);
//!
//!     for session in sessions.all().await? {
//!         println!("{} on {}", session.name, session.date);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod error;
pub mod identity;

// Re-export commonly used types
pub use api::{ApiClient, AuthApi, Session, SessionApi, SessionDraft, TeacherApi, UserApi};
pub use config::Config;
pub use credentials::CredentialStore;
pub use error::{Result, ZenbookError};
pub use identity::{Identity, IdentityStore};
