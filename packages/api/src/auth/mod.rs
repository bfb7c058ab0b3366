//! Access to the external authentication service.

#[cfg(feature = "server")]
mod client;
#[cfg(feature = "server")]
mod config;

#[cfg(feature = "server")]
pub use client::{AuthServiceClient, AuthServiceError};
#[cfg(feature = "server")]
pub use config::AuthServiceConfig;
