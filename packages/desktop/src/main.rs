use dioxus::prelude::*;
use views::{Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/register")]
    Register {},
    #[route("/login")]
    Login {},
}

/// Server the desktop app registers against, fixed at build time.
const SERVER_URL: &str = match option_env!("SIGNUPDESK_SERVER_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

fn main() {
    dioxus::fullstack::set_server_url(SERVER_URL);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Register {});
    rsx! {}
}
