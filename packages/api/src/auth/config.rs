//! Authentication service configuration from environment variables.

use std::time::Duration;

const DEFAULT_SERVICE_URL: &str = "http://localhost:8081";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the authentication service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthServiceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AuthServiceConfig {
    /// Load from `AUTH_SERVICE_URL` and `AUTH_SERVICE_TIMEOUT_SECS`, reading `.env` first.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        Self::from_values(
            std::env::var("AUTH_SERVICE_URL").ok(),
            std::env::var("AUTH_SERVICE_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> Result<Self, String> {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(format!("AUTH_SERVICE_URL must be an http(s) URL, got {base_url}"));
        }

        let timeout_secs = match timeout_secs {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| format!("AUTH_SERVICE_TIMEOUT_SECS must be a positive integer, got {raw}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Endpoint accepting registrations.
    pub fn register_url(&self) -> String {
        format!("{}/register", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthServiceConfig::from_values(None, None).unwrap();
        assert_eq!(config, AuthServiceConfig::default());
        assert_eq!(config.register_url(), "http://localhost:8081/register");
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config =
            AuthServiceConfig::from_values(Some("https://auth.example.com/v1/".into()), Some("3".into()))
                .unwrap();
        assert_eq!(config.register_url(), "https://auth.example.com/v1/register");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_values() {
        assert!(AuthServiceConfig::from_values(Some("auth.example.com".into()), None).is_err());
        assert!(AuthServiceConfig::from_values(None, Some("soon".into())).is_err());
        assert!(AuthServiceConfig::from_values(None, Some("0".into())).is_err());
    }
}
