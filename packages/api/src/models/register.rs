//! # Registration models
//!
//! [`RegisterData`] is the draft a user fills in on the sign-up page and the payload
//! of the `register` server function. [`RegisterOutcome`] is what comes back: it keeps
//! a refusal from the authentication service (with its reason) apart from a transport
//! failure, which travels as a `ServerFnError` instead.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three fields of a [`RegisterData`] draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
}

/// Registration input: username, email and password.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterData {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterData {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Replace a single field, leaving the other two untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        };
        *slot = value.into();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }
}

// Keep passwords out of logs.
impl fmt::Debug for RegisterData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterData")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of a registration attempt as reported by the authentication service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegisterOutcome {
    /// The account was created.
    Registered,
    /// The service answered successfully but reported no account was created.
    Declined,
    /// The service refused the registration, optionally saying why.
    Rejected { message: Option<String> },
}

/// Success body of the authentication service.
#[derive(Debug, Deserialize)]
struct SuccessBody {
    success: bool,
}

/// Error body of the authentication service. Either key may carry the reason.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl RegisterOutcome {
    /// Interpret a response of the authentication service.
    ///
    /// A 2xx answer is `Registered` unless its JSON body says `"success": false`;
    /// an empty or non-JSON 2xx body counts as success. Anything else is `Rejected`
    /// with the body's `message` (or `error`) field as the reason, when non-blank.
    pub fn from_service_response(is_success: bool, body: &str) -> Self {
        if is_success {
            return match serde_json::from_str::<SuccessBody>(body) {
                Ok(SuccessBody { success: false }) => RegisterOutcome::Declined,
                _ => RegisterOutcome::Registered,
            };
        }

        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .message
            .into_iter()
            .chain(parsed.error)
            .find(|m| !m.trim().is_empty());

        RegisterOutcome::Rejected { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_touches_only_one_field() {
        let mut data = RegisterData::new("alice", "alice@example.com", "hunter22");

        data.set(Field::Email, "a@example.org");

        assert_eq!(data.username, "alice");
        assert_eq!(data.email, "a@example.org");
        assert_eq!(data.password, "hunter22");
        assert_eq!(data.get(Field::Email), "a@example.org");
    }

    #[test]
    fn test_default_draft_is_empty() {
        let data = RegisterData::default();
        assert!(data.username.is_empty());
        assert!(data.email.is_empty());
        assert!(data.password.is_empty());
    }

    #[test]
    fn test_debug_redacts_password() {
        let data = RegisterData::new("alice", "alice@example.com", "hunter22");
        let shown = format!("{data:?}");
        assert!(shown.contains("alice"));
        assert!(!shown.contains("hunter22"));
    }

    #[test]
    fn test_success_responses() {
        assert_eq!(
            RegisterOutcome::from_service_response(true, r#"{"success":true}"#),
            RegisterOutcome::Registered
        );
        assert_eq!(
            RegisterOutcome::from_service_response(true, r#"{"success":false}"#),
            RegisterOutcome::Declined
        );
        assert_eq!(
            RegisterOutcome::from_service_response(true, ""),
            RegisterOutcome::Registered
        );
        assert_eq!(
            RegisterOutcome::from_service_response(true, "created"),
            RegisterOutcome::Registered
        );
    }

    #[test]
    fn test_rejection_carries_message() {
        assert_eq!(
            RegisterOutcome::from_service_response(false, r#"{"message":"Username taken"}"#),
            RegisterOutcome::Rejected {
                message: Some("Username taken".to_string())
            }
        );

        // `error` is used when `message` is missing or blank
        assert_eq!(
            RegisterOutcome::from_service_response(
                false,
                r#"{"message":"  ","error":"Email already registered"}"#
            ),
            RegisterOutcome::Rejected {
                message: Some("Email already registered".to_string())
            }
        );
    }

    #[test]
    fn test_rejection_message_is_not_rewritten() {
        assert_eq!(
            RegisterOutcome::from_service_response(false, r#"{"message":" Username taken\n"}"#),
            RegisterOutcome::Rejected {
                message: Some(" Username taken\n".to_string())
            }
        );
    }

    #[test]
    fn test_rejection_without_message() {
        let expected = RegisterOutcome::Rejected { message: None };
        assert_eq!(RegisterOutcome::from_service_response(false, ""), expected);
        assert_eq!(RegisterOutcome::from_service_response(false, "<html>"), expected);
        assert_eq!(RegisterOutcome::from_service_response(false, "{}"), expected);
    }
}
