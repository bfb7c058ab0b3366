//! Registration page view.

use dioxus::prelude::*;
use ui::RegisterView;

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        RegisterView {
            on_registered: move |_| {
                nav.push(Route::Login {});
            },
            Link { to: Route::Login {}, "Already have an account? Sign in" }
        }
    }
}
