//! Session context and hooks for the UI.

use api::{SheetClient, SheetConfig, UserRecord};
use dioxus::prelude::*;

/// Page-session state: the cached user list and the signed-in user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Best-effort mirror of the remote list. Replaced wholesale after each
    /// fetch, never merged, so the only hazard is staleness.
    pub users: Vec<UserRecord>,
    /// The user shown on the dashboard, if someone is signed in.
    pub current: Option<UserRecord>,
}

/// Get the current session state.
/// Returns a signal that updates when someone signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the shared endpoint client.
pub fn use_sheet_client() -> SheetClient {
    use_context::<SheetClient>()
}

/// Provider component owning the session state and the endpoint client.
/// Wrap the app with this component to enable the hooks above.
#[component]
pub fn SessionProvider(config: SheetConfig, children: Element) -> Element {
    let session = use_signal(SessionState::default);
    use_context_provider(|| session);
    use_context_provider(move || SheetClient::new(config));

    rsx! {
        {children}
    }
}
