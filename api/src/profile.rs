//! "Download profile" export for the dashboard.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::models::UserRecord;
use crate::ApiError;

/// Pretty-printed JSON of the record, as written to the downloaded file.
pub fn profile_json(user: &UserRecord) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(user)?)
}

/// `<username>.json`, or `profile.json` when the username is empty.
pub fn profile_filename(user: &UserRecord) -> String {
    let stem = if user.username.is_empty() {
        "profile"
    } else {
        user.username.as_str()
    };
    format!("{stem}.json")
}

/// Self-contained `data:` href for the download anchor.
pub fn profile_download_href(user: &UserRecord) -> Result<String, ApiError> {
    Ok(format!(
        "data:application/json;base64,{}",
        BASE64.encode(profile_json(user)?)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_is_pretty_printed_and_round_trips() {
        let user = UserRecord {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        let json = profile_json(&user).unwrap();
        assert!(json.contains('\n'));
        let back: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn filename_falls_back_to_profile() {
        let user = UserRecord {
            username: "ada".to_string(),
            ..Default::default()
        };
        assert_eq!(profile_filename(&user), "ada.json");
        assert_eq!(profile_filename(&UserRecord::default()), "profile.json");
    }

    #[test]
    fn download_href_embeds_the_json() {
        let user = UserRecord {
            username: "ada".to_string(),
            ..Default::default()
        };
        let href = profile_download_href(&user).unwrap();
        let b64 = href.strip_prefix("data:application/json;base64,").unwrap();
        let decoded = String::from_utf8(BASE64.decode(b64).unwrap()).unwrap();
        assert_eq!(decoded, profile_json(&user).unwrap());
    }
}
