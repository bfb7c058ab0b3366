//! Error surfaced by a failed registration attempt.

use api::RegisterOutcome;
use dioxus::prelude::ServerFnError;

/// Message shown when a failure carries no reason of its own.
pub const DEFAULT_ERROR_MESSAGE: &str = "Registration failed";

/// A failed registration attempt, optionally carrying a human-readable reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.message())]
pub struct RegisterError {
    reason: Option<String>,
}

impl RegisterError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }

    /// A failure that says nothing about why.
    pub fn without_reason() -> Self {
        Self { reason: None }
    }

    /// The reason verbatim, or [`DEFAULT_ERROR_MESSAGE`] when there is none.
    pub fn message(&self) -> &str {
        match self.reason.as_deref() {
            Some(reason) if !reason.is_empty() => reason,
            _ => DEFAULT_ERROR_MESSAGE,
        }
    }
}

impl From<ServerFnError> for RegisterError {
    fn from(e: ServerFnError) -> Self {
        let reason = match e {
            ServerFnError::ServerError { message, .. } => message,
            ServerFnError::Request(inner) => inner.to_string(),
            ServerFnError::StreamError(message)
            | ServerFnError::Registration(message)
            | ServerFnError::UnsupportedRequestMethod(message)
            | ServerFnError::MiddlewareError(message)
            | ServerFnError::Deserialization(message)
            | ServerFnError::Serialization(message)
            | ServerFnError::Args(message)
            | ServerFnError::MissingArg(message)
            | ServerFnError::Response(message) => message,
        };
        Self::new(reason)
    }
}

/// Turn the server function's answer into the `register -> bool` shape the form expects.
pub fn outcome_to_result(outcome: RegisterOutcome) -> Result<bool, RegisterError> {
    match outcome {
        RegisterOutcome::Registered => Ok(true),
        RegisterOutcome::Declined => Ok(false),
        RegisterOutcome::Rejected { message } => Err(RegisterError { reason: message }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_forwarded_verbatim() {
        let err = RegisterError::new("Username taken");
        assert_eq!(err.message(), "Username taken");
        assert_eq!(err.to_string(), "Username taken");
    }

    #[test]
    fn test_missing_or_empty_reason_uses_default() {
        assert_eq!(RegisterError::without_reason().message(), "Registration failed");
        assert_eq!(RegisterError::new("").message(), "Registration failed");
    }

    #[test]
    fn test_outcome_to_result() {
        assert_eq!(outcome_to_result(RegisterOutcome::Registered), Ok(true));
        assert_eq!(outcome_to_result(RegisterOutcome::Declined), Ok(false));
        assert_eq!(
            outcome_to_result(RegisterOutcome::Rejected {
                message: Some("Username taken".to_string())
            }),
            Err(RegisterError::new("Username taken"))
        );
        assert_eq!(
            outcome_to_result(RegisterOutcome::Rejected { message: None }),
            Err(RegisterError::without_reason())
        );
    }

    #[test]
    fn test_from_server_fn_error_keeps_only_the_message() {
        let err = RegisterError::from(ServerFnError::new("connection refused"));
        assert_eq!(err.message(), "connection refused");

        let err = RegisterError::from(ServerFnError::ServerError {
            message: "Username taken".to_string(),
            code: 409,
            details: None,
        });
        assert_eq!(err.message(), "Username taken");
        assert_eq!(err.to_string(), "Username taken");

        let err = RegisterError::from(ServerFnError::Deserialization("unexpected end of input".to_string()));
        assert_eq!(err.message(), "unexpected end of input");
    }

    #[test]
    fn test_server_fn_error_without_message_uses_default() {
        let err = RegisterError::from(ServerFnError::new(""));
        assert_eq!(err.message(), "Registration failed");
    }
}
