use dioxus::prelude::*;
use ui::LoginLanding;

use crate::Route;

/// Login page for the desktop app.
#[component]
pub fn Login() -> Element {
    rsx! {
        LoginLanding {
            Link { to: Route::Register {}, "Need an account? Sign up" }
        }
    }
}
