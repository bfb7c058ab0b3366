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

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .expect("Invalid log filter");

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};

    dotenvy::dotenv().ok();
    init_tracing();

    // Fail at startup rather than on the first sign-up
    match api::auth::AuthServiceConfig::from_env() {
        Ok(config) => tracing::info!("Using authentication service at {}", config.base_url),
        Err(e) => {
            tracing::error!("Invalid authentication service configuration: {}", e);
            std::process::exit(1);
        }
    }

    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server error");
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Redirect `/` to `/register`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Register {});
    rsx! {}
}
