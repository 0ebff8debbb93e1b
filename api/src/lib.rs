//! # API crate — headless core for Sheetbook
//!
//! Everything the frontends need that does not touch a rendered UI lives
//! here, so it can be exercised in plain unit tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`avatar`] | Drive share-link normalization, the initials placeholder, and the direct → proxied → initials fallback machine |
//! | [`client`] | [`SheetClient`] — HTTP client for the spreadsheet web app (create, list, image proxy) |
//! | [`config`] | [`SheetConfig`] — endpoint URL + optional API key |
//! | [`digest`] | SHA-256 hex digest used for credential equality checks |
//! | [`forms`] | Pure signup/signin validation and record assembly |
//! | [`models`] | [`UserRecord`] — the one entity the sheet stores |
//! | [`profile`] | "Download profile" JSON export |
//! | [`resize`] | Client-side avatar downsizing to an inline data URL |

pub mod avatar;
pub mod client;
pub mod config;
pub mod digest;
pub mod forms;
pub mod models;
pub mod profile;
pub mod resize;

pub use client::SheetClient;
pub use config::SheetConfig;
pub use models::UserRecord;

/// Errors surfaced by the headless core.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No endpoint URL has been set; nothing remote was attempted.
    #[error("no storage endpoint configured")]
    Unconfigured,
    /// The sheet already holds this username (reported by the endpoint).
    #[error("username already exists")]
    UsernameExists,
    /// The sheet already holds this email (reported by the endpoint).
    #[error("email already registered")]
    EmailExists,
    /// Any other `{error: ...}` value the endpoint returned.
    #[error("server error: {0}")]
    Remote(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("image decode failed: {0}")]
    Image(#[from] image::ImageError),
}
