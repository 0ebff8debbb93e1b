use api::SheetConfig;
use dioxus::prelude::*;

use ui::SessionProvider;
use views::{Dashboard, SignIn, SignUp};

mod views;

/// Deployed Apps Script web app fronting the user sheet — paste your web
/// app URL here. Left empty, every remote operation reports the missing
/// configuration instead of attempting a call.
const SHEET_ENDPOINT: &str = "";

/// Optional write key the Apps Script checks; sent as an `apiKey` field on
/// the signup POST when non-empty.
const SHEET_API_KEY: &str = "";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    SignUp {},
    #[route("/signin")]
    SignIn {},
    #[route("/dashboard")]
    Dashboard {},
}

fn main() {
    dioxus::launch(App);
}

fn sheet_config() -> SheetConfig {
    let config = SheetConfig::new(SHEET_ENDPOINT);
    if SHEET_API_KEY.is_empty() {
        config
    } else {
        config.with_api_key(SHEET_API_KEY)
    }
}

#[component]
fn App() -> Element {
    rsx! {
        SessionProvider {
            config: sheet_config(),
            Router::<Route> {}
        }
    }
}
