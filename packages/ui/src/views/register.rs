use dioxus::prelude::*;

use api::Field;
use crate::authenticator::{use_authenticator, Authenticator};
use crate::icons::{FaEnvelope, FaLock, FaUser};
use crate::register_form::{RegisterForm, SubmitOutcome};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const FIELDS: [Field; 3] = [Field::Username, Field::Email, Field::Password];

/// Shared sign-up view.
///
/// Fires `on_registered` once the account exists; platform packages use it to
/// navigate to their login route. `children` are rendered under the submit button,
/// which is where platforms put their "sign in instead" link.
///
/// Registers through the [`AuthenticatorHandle`](crate::AuthenticatorHandle) in
/// context, falling back to the `register` server function.
#[component]
pub fn RegisterView(on_registered: EventHandler<()>, children: Element) -> Element {
    let auth = use_authenticator();
    let mut form = use_signal(RegisterForm::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(data) = form.write().begin_submit() else {
            return;
        };
        let auth = auth.clone();
        spawn(async move {
            let result = auth.register(data).await;
            if let Err(e) = &result {
                tracing::warn!("Registration failed: {}", e);
            }
            if form.write().finish_submit(result) == SubmitOutcome::RedirectToLogin {
                on_registered.call(());
            }
        });
    };

    let state = form.read();
    let busy = state.is_busy();
    let label = state.submit_label();
    let error = state.error().map(str::to_string);
    let values = FIELDS.map(|field| state.draft().get(field).to_string());
    drop(state);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "register-page",

            div {
                class: "register-card",

                h2 { class: "register-title", "Create your account" }

                form {
                    class: "register-form",
                    onsubmit: handle_submit,

                    if let Some(err) = error {
                        div { class: "register-error", role: "alert", "{err}" }
                    }

                    div {
                        class: "register-fields",
                        for (field, value) in FIELDS.into_iter().zip(values) {
                            FieldInput {
                                key: "{field:?}",
                                field,
                                value,
                                oninput: move |value: String| form.write().update(field, value),
                            }
                        }
                    }

                    button {
                        class: "register-submit",
                        r#type: "submit",
                        disabled: busy,
                        "{label}"
                    }

                    div { class: "register-footer", {children} }
                }
            }
        }
    }
}

/// A required input bound to one field of the draft.
#[component]
fn FieldInput(field: Field, value: String, oninput: EventHandler<String>) -> Element {
    let (id, input_type, label) = match field {
        Field::Username => ("username", "text", "Username"),
        Field::Email => ("email", "email", "Email"),
        Field::Password => ("password", "password", "Password"),
    };

    rsx! {
        div {
            label { class: "sr-only", r#for: id, "{label}" }
            div {
                class: "register-input-wrap",
                span {
                    class: "register-input-icon",
                    {match field {
                        Field::Username => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
                        Field::Email => rsx! { Icon { icon: FaEnvelope, width: 16, height: 16 } },
                        Field::Password => rsx! { Icon { icon: FaLock, width: 16, height: 16 } },
                    }}
                }
                input {
                    id,
                    name: id,
                    class: "register-input",
                    r#type: input_type,
                    required: true,
                    placeholder: label,
                    value,
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            }
        }
    }
}
