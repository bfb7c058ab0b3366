//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod authenticator;
pub use authenticator::{use_authenticator, Authenticator, AuthenticatorHandle, ServerAuthenticator};

mod error;
pub use error::{outcome_to_result, RegisterError, DEFAULT_ERROR_MESSAGE};

mod register_form;
pub use register_form::{RegisterForm, SubmitOutcome, SubmitState, SUBMITTING_LABEL, SUBMIT_LABEL};

pub mod views;
pub use views::{LoginLanding, RegisterView};
