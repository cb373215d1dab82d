//! Command-line interface definition for Zenbook
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for authentication, session booking, the teacher
//! directory, and account management.

use clap::{Parser, Subcommand};

/// Zenbook - studio session booking client
///
/// Browse and join scheduled sessions, or manage them as an
/// administrator, against a booking backend.
#[derive(Parser, Debug, Clone)]
#[command(name = "zenbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Backend base URL override
    #[arg(long)]
    pub base_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Zenbook
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Log in to the booking backend
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long, env = "ZENBOOK_PASSWORD")]
        password: String,
    },

    /// Log out and discard the stored credential
    Logout,

    /// Register a new account
    Register {
        /// Account email
        #[arg(long)]
        email: String,

        /// First name
        #[arg(long)]
        first_name: String,

        /// Last name
        #[arg(long)]
        last_name: String,

        /// Account password
        #[arg(long, env = "ZENBOOK_PASSWORD")]
        password: String,
    },

    /// Show the currently logged-in identity
    Whoami,

    /// Browse and manage bookable sessions
    Session {
        /// Session subcommand
        #[command(subcommand)]
        command: SessionCommand,
    },

    /// Browse the teacher directory
    Teacher {
        /// Teacher subcommand
        #[command(subcommand)]
        command: TeacherCommand,
    },

    /// Inspect or delete the logged-in account
    Account {
        /// Account subcommand
        #[command(subcommand)]
        command: AccountCommand,
    },
}

/// Session subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SessionCommand {
    /// List all scheduled sessions
    List,

    /// Show one session in detail
    Show {
        /// Session id
        id: i64,
    },

    /// Create a session (administrators only)
    Create {
        /// Session title
        #[arg(long)]
        name: String,

        /// Session date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Teacher id running the session
        #[arg(long = "teacher")]
        teacher_id: Option<i64>,

        /// Free-text description
        #[arg(long)]
        description: String,
    },

    /// Update a session (administrators only)
    Update {
        /// Session id
        id: i64,

        /// Session title
        #[arg(long)]
        name: String,

        /// Session date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Teacher id running the session
        #[arg(long = "teacher")]
        teacher_id: Option<i64>,

        /// Free-text description
        #[arg(long)]
        description: String,
    },

    /// Delete a session (administrators only)
    Delete {
        /// Session id
        id: i64,
    },

    /// Join a session roster
    Join {
        /// Session id
        id: i64,

        /// User id to register; defaults to the logged-in user
        #[arg(long)]
        user: Option<i64>,
    },

    /// Leave a session roster
    Leave {
        /// Session id
        id: i64,

        /// User id to remove; defaults to the logged-in user
        #[arg(long)]
        user: Option<i64>,
    },
}

/// Teacher subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TeacherCommand {
    /// List all teachers
    List,

    /// Show one teacher in detail
    Show {
        /// Teacher id
        id: i64,
    },
}

/// Account subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum AccountCommand {
    /// Show the logged-in account's details
    Show,

    /// Delete the logged-in account and log out
    Delete,
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: None,
            base_url: None,
            verbose: false,
            command: Commands::Whoami,
        }
    }
}
