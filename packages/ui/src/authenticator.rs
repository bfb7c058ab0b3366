//! The authentication collaborator the registration view talks to.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use api::RegisterData;
use dioxus::prelude::*;

use crate::error::{outcome_to_result, RegisterError};

/// Something that can register an account.
///
/// Resolves to `Ok(true)` when the account was created, `Ok(false)` when the
/// service declined without saying why, and `Err` when it refused.
pub trait Authenticator {
    fn register(&self, data: RegisterData) -> impl Future<Output = Result<bool, RegisterError>>;
}

/// Registers through the `api::register` server function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerAuthenticator;

impl Authenticator for ServerAuthenticator {
    async fn register(&self, data: RegisterData) -> Result<bool, RegisterError> {
        let outcome = api::register(data).await?;
        outcome_to_result(outcome)
    }
}

type RegisterFuture = Pin<Box<dyn Future<Output = Result<bool, RegisterError>>>>;

/// Any [`Authenticator`], boxed so it can be shared through a Dioxus context.
#[derive(Clone)]
pub struct AuthenticatorHandle(Rc<dyn Fn(RegisterData) -> RegisterFuture>);

impl AuthenticatorHandle {
    pub fn new<A: Authenticator + 'static>(auth: A) -> Self {
        let auth = Rc::new(auth);
        Self(Rc::new(move |data: RegisterData| -> RegisterFuture {
            let auth = auth.clone();
            Box::pin(async move { auth.register(data).await })
        }))
    }
}

impl Authenticator for AuthenticatorHandle {
    fn register(&self, data: RegisterData) -> impl Future<Output = Result<bool, RegisterError>> {
        (self.0)(data)
    }
}

/// The authenticator provided by an ancestor, or [`ServerAuthenticator`] when there is none.
pub fn use_authenticator() -> AuthenticatorHandle {
    let provided = try_use_context::<AuthenticatorHandle>();
    use_hook(move || provided.unwrap_or_else(|| AuthenticatorHandle::new(ServerAuthenticator)))
}
