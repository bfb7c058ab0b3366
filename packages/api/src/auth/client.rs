//! HTTP client for the external authentication service.
//!
//! The service takes a JSON [`RegisterData`] at `POST {base_url}/register`. Its answer
//! is interpreted by [`RegisterOutcome::from_service_response`]; only failures to get
//! an answer at all surface as [`AuthServiceError`].

use reqwest::Client;

use super::config::AuthServiceConfig;
use crate::models::{RegisterData, RegisterOutcome};

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("Authentication service misconfigured: {0}")]
    Config(String),
    #[error("Authentication service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the authentication service.
#[derive(Debug, Clone)]
pub struct AuthServiceClient {
    config: AuthServiceConfig,
    http: Client,
}

impl AuthServiceClient {
    pub fn new(config: AuthServiceConfig) -> Result<Self, AuthServiceError> {
        let http = reqwest::ClientBuilder::new()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    /// Build a client from `AUTH_SERVICE_*` environment variables.
    pub fn from_env() -> Result<Self, AuthServiceError> {
        let config = AuthServiceConfig::from_env().map_err(AuthServiceError::Config)?;
        Self::new(config)
    }

    /// Submit a registration to the service.
    pub async fn register(&self, data: &RegisterData) -> Result<RegisterOutcome, AuthServiceError> {
        let response = self
            .http
            .post(self.config.register_url())
            .json(data)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let outcome = RegisterOutcome::from_service_response(status.is_success(), &body);

        tracing::debug!(%status, ?outcome, "Authentication service answered");
        Ok(outcome)
    }
}
