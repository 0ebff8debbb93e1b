//! # Avatar URL normalization and the display fallback chain
//!
//! Stored avatar references come in three shapes: inline data URLs, plain
//! remote URLs, and Google Drive share links in several formats. Drive
//! links cannot be rendered directly, so [`normalize_avatar_url`] rewrites
//! them to the `uc?export=view` form. When even that fails to load, the
//! display runs a small state machine:
//!
//! 1. **direct** — render the normalized (or inline) URL;
//! 2. **proxied** — on load failure, re-derive the Drive file id and fetch
//!    an inline data URL through the endpoint's image proxy, at most once;
//! 3. **initials** — terminal: a synthesized SVG with the user's first two
//!    name initials.
//!
//! [`AvatarFallback`] is that machine, independent of any image-loading
//! primitive so it can be tested headless.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::UserRecord;

/// Real Drive file ids run 25–45 characters; a shorter extraction is
/// treated as garbage and falls through to the initials avatar.
const MIN_DRIVE_ID_LEN: usize = 20;

/// The proxy retry is more permissive about id length.
const MIN_PROXY_ID_LEN: usize = 10;

// The three known share-link shapes, tried in order.
static PATH_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"/file/d/([a-zA-Z0-9_-]+)").unwrap());
static QUERY_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?&]id=([a-zA-Z0-9_-]+)").unwrap());
static DIRECT_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"uc\?export=view&id=([a-zA-Z0-9_-]+)").unwrap());

/// Pull a Drive file id out of any of the known share-link shapes. The
/// first pattern that matches wins; the match must be at least `min_len`
/// characters.
pub fn extract_drive_id(url: &str, min_len: usize) -> Option<String> {
    [&*PATH_ID, &*QUERY_ID, &*DIRECT_ID]
        .iter()
        .find_map(|re| re.captures(url))
        .map(|caps| caps[1].to_string())
        .filter(|id| id.len() >= min_len)
}

/// Rewrite a stored avatar reference into something an `img` tag can load.
///
/// Inline data URLs and non-Drive URLs pass through unchanged; Drive share
/// links are rewritten to the direct-view form. `None` means there is
/// nothing usable and the caller should show the initials placeholder.
pub fn normalize_avatar_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if !raw.contains("drive.google.com") {
        return Some(raw.to_string());
    }
    let id = extract_drive_id(raw, MIN_DRIVE_ID_LEN)?;
    Some(format!("https://drive.google.com/uc?export=view&id={id}"))
}

/// Placeholder avatar: the first two name initials, white on the fixed
/// `#4f46e5` background, as an inline SVG data URL.
pub fn initials_avatar(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();
    let initials = if initials.is_empty() { "?".to_string() } else { initials };
    format!(
        "data:image/svg+xml;utf8,<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"96\" height=\"96\">\
         <rect width=\"100%25\" height=\"100%25\" fill=\"%234f46e5\"/>\
         <text x=\"50%25\" y=\"50%25\" dominant-baseline=\"middle\" text-anchor=\"middle\" \
         fill=\"white\" font-size=\"40\" font-family=\"sans-serif\">{initials}</text></svg>"
    )
}

/// What the dashboard should point the `img` tag at.
#[derive(Debug, Clone, PartialEq)]
pub enum AvatarSource {
    Url(String),
    Initials,
}

/// Next move after an image load failure.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackStep {
    /// Ask the endpoint to proxy this Drive file id.
    FetchProxy(String),
    /// Terminal: synthesize the initials graphic.
    UseInitials,
}

/// Load-failure recovery for one render of a user's avatar.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarFallback {
    file_id: Option<String>,
    proxy_tried: bool,
}

impl AvatarFallback {
    /// Initial display source plus the recovery state for `user`'s avatar.
    pub fn for_user(user: &UserRecord) -> (AvatarSource, AvatarFallback) {
        let raw = user.avatar_ref();
        let source = match normalize_avatar_url(raw) {
            Some(url) => AvatarSource::Url(url),
            None => AvatarSource::Initials,
        };
        let fallback = AvatarFallback {
            file_id: extract_drive_id(raw, MIN_PROXY_ID_LEN),
            proxy_tried: false,
        };
        (source, fallback)
    }

    /// Called when the currently displayed image fails to load. Yields the
    /// proxy step exactly once when a file id exists; every other call is
    /// terminal.
    pub fn on_load_error(&mut self) -> FallbackStep {
        match &self.file_id {
            Some(id) if !self.proxy_tried => {
                self.proxy_tried = true;
                FallbackStep::FetchProxy(id.clone())
            }
            _ => FallbackStep::UseInitials,
        }
    }
}
