//! # Registration form state
//!
//! [`RegisterForm`] holds everything the sign-up view shows: the draft being typed,
//! whether a submission is in flight, and the error from the last attempt. The view
//! keeps one inside a signal and renders from it; the logic lives here so it can be
//! driven without a renderer.
//!
//! A submission is split in two so the view can release its signal while the call is
//! pending: [`begin_submit`](RegisterForm::begin_submit) clears the error, enters
//! [`SubmitState::Submitting`] and hands back the draft to send, and
//! [`finish_submit`](RegisterForm::finish_submit) goes back to
//! [`SubmitState::Idle`] whatever the result was and says where to go next.

use api::{Field, RegisterData};

use crate::authenticator::Authenticator;
use crate::error::RegisterError;

pub const SUBMIT_LABEL: &str = "Sign up";
pub const SUBMITTING_LABEL: &str = "Creating account...";

/// Whether a submission is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

/// What the view should do once a submission has resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The account exists; send the user to the login page.
    RedirectToLogin,
    /// Stay on the form.
    Stay,
}

/// State of the registration view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    draft: RegisterData,
    state: SubmitState,
    error: Option<String>,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &RegisterData {
        &self.draft
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Error from the last attempt, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Start a submission and return the draft to send.
    ///
    /// Returns `None` without touching anything while another submission is in flight.
    pub fn begin_submit(&mut self) -> Option<RegisterData> {
        if self.is_busy() {
            return None;
        }
        self.error = None;
        self.state = SubmitState::Submitting;
        Some(self.draft.clone())
    }

    /// Record the result of the submission started by [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(&mut self, result: Result<bool, RegisterError>) -> SubmitOutcome {
        self.state = SubmitState::Idle;
        match result {
            Ok(true) => SubmitOutcome::RedirectToLogin,
            Ok(false) => SubmitOutcome::Stay,
            Err(e) => {
                self.error = Some(e.message().to_string());
                SubmitOutcome::Stay
            }
        }
    }

    /// Run a whole submission against `auth`.
    ///
    /// Returns `None` when a submission was already in flight.
    pub async fn submit<A: Authenticator>(&mut self, auth: &A) -> Option<SubmitOutcome> {
        let data = self.begin_submit()?;
        let result = auth.register(data).await;
        Some(self.finish_submit(result))
    }
}
