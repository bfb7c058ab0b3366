//! # API crate — shared fullstack server functions for SignupDesk
//!
//! Defines the Dioxus server function the web and desktop frontends call to create
//! an account, along with the types that cross the client/server boundary.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Configuration of, and HTTP client for, the external authentication service |
//! | [`models`] | — | `RegisterData` draft and the `RegisterOutcome` returned by `register` |
//!
//! ## Server functions exposed here
//!
//! - **Authentication**: `register`
//!
//! Like every Dioxus server function it is compiled twice: once with the server logic
//! (behind `#[cfg(feature = "server")]`) and once as a client stub that forwards the
//! call over HTTP.

use dioxus::prelude::*;

pub mod auth;
pub mod models;

pub use models::{Field, RegisterData, RegisterOutcome};

/// Register a new account with the authentication service.
///
/// A refusal by the service is returned as [`RegisterOutcome::Rejected`]; a
/// `ServerFnError` means the service could not be asked at all.
#[cfg(feature = "server")]
#[post("/api/auth/register")]
pub async fn register(data: RegisterData) -> Result<RegisterOutcome, ServerFnError> {
    tracing::info!(username = %data.username, "Registration attempt");

    let client = auth::AuthServiceClient::from_env().map_err(|e| {
        tracing::error!("Failed to create auth service client: {}", e);
        ServerFnError::new(e.to_string())
    })?;

    let outcome = client.register(&data).await.map_err(|e| {
        tracing::error!("Registration request failed: {}", e);
        ServerFnError::new(e.to_string())
    })?;

    match &outcome {
        RegisterOutcome::Registered => {
            tracing::info!(username = %data.username, "Account created");
        }
        RegisterOutcome::Declined => {
            tracing::warn!(username = %data.username, "Registration declined");
        }
        RegisterOutcome::Rejected { message } => {
            tracing::warn!(username = %data.username, reason = ?message, "Registration rejected");
        }
    }

    Ok(outcome)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(data: RegisterData) -> Result<RegisterOutcome, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
