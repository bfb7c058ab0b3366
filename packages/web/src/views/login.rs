//! Login page view, where new accounts land after signing up.

use dioxus::prelude::*;
use ui::LoginLanding;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    rsx! {
        LoginLanding {
            Link { to: Route::Register {}, "Need an account? Sign up" }
        }
    }
}
