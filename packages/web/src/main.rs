use dioxus::prelude::*;

use ui::{use_auth_redirect, SessionProvider};
use views::{Admin, Dashboard, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin")]
    Admin {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Send `/` to the dashboard or to login, depending on the stored session.
#[component]
fn Root() -> Element {
    use_auth_redirect(Route::Dashboard {}, Route::Login {});
    rsx! {
        div {
            class: "page page--centered",
            p { "Loading..." }
        }
    }
}
