//! # User record stored in the sheet
//!
//! One row per user, created at signup and read back at signin and on the
//! dashboard. Every field is a plain string because the spreadsheet columns
//! are; missing columns deserialize to their defaults so older sheets still
//! parse.
//!
//! - `username` / `email` — the two case-insensitively unique keys. The
//!   endpoint is authoritative for uniqueness; the client only pre-checks
//!   its cached copy of the list.
//! - `hash` — lowercase hex SHA-256 of the password (see [`crate::digest`]).
//! - `avatar` — whatever signup submitted: an inline data URL or a remote
//!   URL. When the endpoint offloads the image to Drive it writes the share
//!   link back into an `avatarUrl` column, which wins over `avatar` for
//!   display.
//! - `created` — client-stamped RFC 3339 time; older sheets name the column
//!   `timestamp`, accepted as an alias.
//!
//! The client never updates or deletes rows.

use serde::{Deserialize, Serialize};

/// One user's stored profile data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Lowercase hex SHA-256 of the password.
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub address: String,
    /// Inline data URL or remote URL, as submitted at signup.
    #[serde(default)]
    pub avatar: String,
    /// Drive share link written back by the endpoint when it offloads the
    /// uploaded image.
    #[serde(default, rename = "avatarUrl", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// ISO-8601 creation time.
    #[serde(default, alias = "timestamp")]
    pub created: String,
}

impl UserRecord {
    /// Display name: full name, falling back to the username.
    pub fn display_name(&self) -> &str {
        if self.fullname.is_empty() {
            &self.username
        } else {
            &self.fullname
        }
    }

    /// The avatar reference to render: the endpoint-written Drive link wins
    /// over the inline submission.
    pub fn avatar_ref(&self) -> &str {
        match self.avatar_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => &self.avatar,
        }
    }

    /// Case-insensitive match of `who` against username or email.
    pub fn matches_identifier(&self, who: &str) -> bool {
        self.username.eq_ignore_ascii_case(who)
            || (!self.email.is_empty() && self.email.eq_ignore_ascii_case(who))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sheet_row_with_timestamp_alias() {
        let row = r#"{
            "fullname": "Ada Lovelace",
            "username": "ada",
            "email": "ada@example.com",
            "hash": "deadbeef",
            "timestamp": "2026-01-02T03:04:05Z",
            "avatarUrl": "https://drive.google.com/file/d/1AbCDefGhIJ23456789_XYZ/view"
        }"#;
        let user: UserRecord = serde_json::from_str(row).unwrap();
        assert_eq!(user.created, "2026-01-02T03:04:05Z");
        assert_eq!(
            user.avatar_ref(),
            "https://drive.google.com/file/d/1AbCDefGhIJ23456789_XYZ/view"
        );
        // Untouched optional columns default.
        assert_eq!(user.phone, "");
        assert_eq!(user.avatar, "");
    }

    #[test]
    fn avatar_url_column_is_omitted_when_absent() {
        let json = serde_json::to_value(UserRecord::default()).unwrap();
        assert!(json.get("avatarUrl").is_none());
        assert!(json.get("avatar").is_some());
    }

    #[test]
    fn identifier_matching_is_case_insensitive() {
        let user = UserRecord {
            username: "alice".to_string(),
            email: "Alice@Example.com".to_string(),
            ..Default::default()
        };
        assert!(user.matches_identifier("Alice"));
        assert!(user.matches_identifier("alice@example.COM"));
        assert!(!user.matches_identifier("bob"));
    }

    #[test]
    fn empty_email_never_matches() {
        let user = UserRecord {
            username: "carol".to_string(),
            ..Default::default()
        };
        assert!(!user.matches_identifier(""));
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let user = UserRecord {
            username: "dave".to_string(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "dave");
    }
}
