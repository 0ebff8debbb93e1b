//! This crate contains the shared UI for the workspace.

mod session;
pub use session::{use_session, use_sheet_client, SessionProvider, SessionState};

mod avatar;
pub use avatar::Avatar;
