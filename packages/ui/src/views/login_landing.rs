use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared login landing page, where new accounts arrive after signing up.
///
/// `children` are rendered under the heading; platforms put their sign-up link there.
#[component]
pub fn LoginLanding(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "login-page",

            h1 { class: "login-title", "Sign in" }

            p { class: "login-subtitle", "Sign in with your username and password." }

            div { class: "login-footer", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> Element {
        rsx! {
            LoginLanding {
                a { href: "/register", "Need an account? Sign up" }
            }
        }
    }

    #[test]
    fn test_renders_heading_and_platform_link() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("login-page"));
        assert!(html.contains("Sign in"));
        assert!(html.contains("Need an account? Sign up"));
    }
}
