//! Pure signup/signin logic shared by the form views.
//!
//! Validation runs entirely against local state (the form fields, the
//! cached user list, and the configured-endpoint flag) so a rejected
//! submission never touches the network. Messages are the exact strings the
//! views surface.

use crate::digest::sha256_hex;
use crate::models::UserRecord;

/// Everything the signup form collects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub fullname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub phone: String,
    pub dob: String,
    pub gender: String,
    pub address: String,
    pub terms: bool,
}

/// Validate a signup ahead of any network call. Checks run in a fixed order
/// and the first failure wins: required fields, password confirmation,
/// terms, endpoint configuration, then case-insensitive username/email
/// collisions against the cached list.
pub fn validate_signup(
    form: &SignupForm,
    users: &[UserRecord],
    configured: bool,
) -> Result<(), String> {
    let username = form.username.trim();
    let email = form.email.trim();

    if form.fullname.trim().is_empty()
        || username.is_empty()
        || email.is_empty()
        || form.password.is_empty()
        || form.confirm.is_empty()
    {
        return Err("Please fill required fields".to_string());
    }
    if form.password != form.confirm {
        return Err("Passwords do not match".to_string());
    }
    if !form.terms {
        return Err("You must accept Terms & Conditions".to_string());
    }
    if !configured {
        return Err("No storage endpoint configured".to_string());
    }
    if users
        .iter()
        .any(|u| u.username.eq_ignore_ascii_case(username))
    {
        return Err("Username already exists".to_string());
    }
    if users
        .iter()
        .any(|u| !u.email.is_empty() && u.email.eq_ignore_ascii_case(email))
    {
        return Err("Email already registered".to_string());
    }
    Ok(())
}

/// Assemble the record that goes to the sheet: trimmed fields, hashed
/// password, client-side creation timestamp.
pub fn build_record(form: &SignupForm, avatar: String) -> UserRecord {
    UserRecord {
        fullname: form.fullname.trim().to_string(),
        username: form.username.trim().to_string(),
        email: form.email.trim().to_string(),
        hash: sha256_hex(&form.password),
        phone: form.phone.trim().to_string(),
        dob: form.dob.clone(),
        gender: form.gender.clone(),
        address: form.address.trim().to_string(),
        avatar,
        avatar_url: None,
        created: chrono::Utc::now().to_rfc3339(),
    }
}

/// Both signin fields are required.
pub fn validate_signin(who: &str, password: &str) -> Result<(), String> {
    if who.trim().is_empty() || password.is_empty() {
        return Err("Fill both fields".to_string());
    }
    Ok(())
}

/// Linear search for a record whose username or email matches `who`
/// case-insensitively and whose stored digest equals the digest of
/// `password`.
pub fn verify_signin<'a>(
    users: &'a [UserRecord],
    who: &str,
    password: &str,
) -> Option<&'a UserRecord> {
    let who = who.trim();
    let found = users.iter().find(|u| u.matches_identifier(who))?;
    (found.hash == sha256_hex(password)).then_some(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SignupForm {
        SignupForm {
            fullname: "Ada Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "abc123".to_string(),
            confirm: "abc123".to_string(),
            terms: true,
            ..Default::default()
        }
    }

    fn user(username: &str, email: &str) -> UserRecord {
        UserRecord {
            username: username.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_required_field_is_rejected_first() {
        let mut form = filled_form();
        form.email.clear();
        form.terms = false;
        assert_eq!(
            validate_signup(&form, &[], true),
            Err("Please fill required fields".to_string())
        );
    }

    #[test]
    fn near_miss_confirmation_is_rejected() {
        let mut form = filled_form();
        form.confirm = "abc1234".to_string();
        assert_eq!(
            validate_signup(&form, &[], true),
            Err("Passwords do not match".to_string())
        );
    }

    #[test]
    fn unchecked_terms_are_rejected() {
        let mut form = filled_form();
        form.terms = false;
        assert_eq!(
            validate_signup(&form, &[], true),
            Err("You must accept Terms & Conditions".to_string())
        );
    }

    #[test]
    fn unconfigured_endpoint_blocks_before_duplicate_checks() {
        let existing = [user("ada", "ada@example.com")];
        assert_eq!(
            validate_signup(&filled_form(), &existing, false),
            Err("No storage endpoint configured".to_string())
        );
    }

    #[test]
    fn username_collision_is_case_insensitive() {
        let existing = [user("alice", "alice@example.com")];
        let mut form = filled_form();
        form.username = "Alice".to_string();
        assert_eq!(
            validate_signup(&form, &existing, true),
            Err("Username already exists".to_string())
        );
    }

    #[test]
    fn email_collision_is_case_insensitive() {
        let existing = [user("someone", "Ada@Example.com")];
        assert_eq!(
            validate_signup(&filled_form(), &existing, true),
            Err("Email already registered".to_string())
        );
    }

    #[test]
    fn clean_signup_passes() {
        let existing = [user("bob", "bob@example.com")];
        assert_eq!(validate_signup(&filled_form(), &existing, true), Ok(()));
    }

    #[test]
    fn built_record_trims_hashes_and_stamps() {
        let mut form = filled_form();
        form.fullname = "  Ada Lovelace  ".to_string();
        let record = build_record(&form, String::new());
        assert_eq!(record.fullname, "Ada Lovelace");
        assert_eq!(record.hash, sha256_hex("abc123"));
        assert_eq!(record.avatar, "");
        assert!(chrono::DateTime::parse_from_rfc3339(&record.created).is_ok());
    }

    #[test]
    fn signin_requires_both_fields() {
        assert!(validate_signin("ada", "pw").is_ok());
        assert_eq!(
            validate_signin("  ", "pw"),
            Err("Fill both fields".to_string())
        );
        assert_eq!(
            validate_signin("ada", ""),
            Err("Fill both fields".to_string())
        );
    }

    #[test]
    fn signin_matches_email_in_any_case() {
        let mut stored = user("ada", "ada@example.com");
        stored.hash = sha256_hex("abc123");
        let users = [stored];

        let found = verify_signin(&users, "ADA@EXAMPLE.COM", "abc123");
        assert_eq!(found.map(|u| u.username.as_str()), Some("ada"));
    }

    #[test]
    fn wrong_password_with_correct_identifier_fails() {
        let mut stored = user("ada", "ada@example.com");
        stored.hash = sha256_hex("abc123");
        let users = [stored];

        assert!(verify_signin(&users, "ada", "abc124").is_none());
        assert!(verify_signin(&users, "nobody", "abc123").is_none());
    }
}
