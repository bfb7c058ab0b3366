use dioxus::prelude::*;
use ui::RegisterView;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        RegisterView {
            on_registered: move |_| {
                nav.replace(Route::Login {});
            },
            Link { to: Route::Login {}, "Already have an account? Sign in" }
        }
    }
}
