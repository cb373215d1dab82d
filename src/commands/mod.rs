//! Command handlers for Zenbook
//!
//! Each submodule implements the handlers for one CLI command group.
//! Handlers are the view layer: they read the identity store to decide
//! what to offer, invoke the API workflows, and render results as tables
//! and colored confirmations. Privilege checks here are presentation
//! gating only; the workflows and the backend enforce for real.

pub mod account;
pub mod auth;
pub mod session;
pub mod teacher;
