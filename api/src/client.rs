//! # HTTP client for the spreadsheet web app
//!
//! The endpoint is a single Apps Script URL that multiplexes three
//! operations:
//!
//! - `POST` with a JSON user record (plus `apiKey` when configured) appends
//!   a row; duplicate keys come back as `{error: "username_exists"}` or
//!   `{error: "email_exists"}`.
//! - `GET` with no parameters returns the full JSON array of records.
//! - `GET` with `action=getImage&id=<drive file id>` proxies a Drive-hosted
//!   image back as `{dataUrl: "data:image/..."}`.
//!
//! Every operation fails fast with [`ApiError::Unconfigured`] before any
//! network I/O when no endpoint URL is set. No retries and no timeouts at
//! this layer; each failure is reported once and the operation abandoned.

use serde_json::Value;

use crate::config::SheetConfig;
use crate::models::UserRecord;
use crate::ApiError;

/// Client for the spreadsheet web app. Cheap to clone — the inner
/// `reqwest::Client` is reference-counted.
#[derive(Debug, Clone, Default)]
pub struct SheetClient {
    config: SheetConfig,
    http: reqwest::Client,
}

impl SheetClient {
    pub fn new(config: SheetConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Whether a remote endpoint has been set at all.
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn endpoint(&self) -> Result<&str, ApiError> {
        if self.config.is_configured() {
            Ok(self.config.endpoint.as_str())
        } else {
            Err(ApiError::Unconfigured)
        }
    }

    /// Append one user record to the sheet.
    pub async fn create_user(&self, user: &UserRecord) -> Result<(), ApiError> {
        let endpoint = self.endpoint()?;

        let mut payload = serde_json::to_value(user)?;
        if let (Some(key), Some(obj)) = (&self.config.api_key, payload.as_object_mut()) {
            obj.insert("apiKey".to_string(), Value::String(key.clone()));
        }

        // Plain string body, no JSON content type: Apps Script web apps
        // cannot answer a CORS preflight, and an `application/json` header
        // would trigger one.
        let body = serde_json::to_string(&payload)?;
        let response: Value = self
            .http
            .post(endpoint)
            .body(body)
            .send()
            .await?
            .json()
            .await?;
        parse_create_response(response)
    }

    /// Fetch every user record from the sheet.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let endpoint = self.endpoint()?;
        let users = self.http.get(endpoint).send().await?.json().await?;
        Ok(users)
    }

    /// Ask the endpoint to proxy a Drive-hosted image as an inline data
    /// URL. `Ok(None)` means the endpoint had nothing for this id.
    pub async fn fetch_image(&self, id: &str) -> Result<Option<String>, ApiError> {
        let endpoint = self.endpoint()?;
        let response = self
            .http
            .get(endpoint)
            .query(&[("action", "getImage"), ("id", id)])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "image proxy request failed");
            return Ok(None);
        }

        let value: Value = response.json().await?;
        Ok(parse_image_response(value))
    }
}

/// Pull the inline image out of a proxy response; `None` when the endpoint
/// answered without a `dataUrl` field.
fn parse_image_response(value: Value) -> Option<String> {
    value
        .get("dataUrl")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Map the endpoint's create response: `{error: ...}` marks a failure, with
/// dedicated variants for the two duplicate-key cases.
fn parse_create_response(value: Value) -> Result<(), ApiError> {
    match value.get("error").and_then(Value::as_str) {
        None => Ok(()),
        Some("username_exists") => Err(ApiError::UsernameExists),
        Some("email_exists") => Err(ApiError::EmailExists),
        Some(other) => Err(ApiError::Remote(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stored_record_response_is_ok() {
        assert!(parse_create_response(json!({"username": "ada", "email": "ada@example.com"})).is_ok());
    }

    #[test]
    fn duplicate_keys_map_to_dedicated_errors() {
        assert!(matches!(
            parse_create_response(json!({"error": "username_exists"})),
            Err(ApiError::UsernameExists)
        ));
        assert!(matches!(
            parse_create_response(json!({"error": "email_exists"})),
            Err(ApiError::EmailExists)
        ));
    }

    #[test]
    fn other_errors_carry_the_server_message() {
        match parse_create_response(json!({"error": "quota exceeded"})) {
            Err(ApiError::Remote(msg)) => assert_eq!(msg, "quota exceeded"),
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[test]
    fn proxy_response_with_data_url_yields_the_image() {
        let parsed = parse_image_response(json!({"dataUrl": "data:image/jpeg;base64,AAAA"}));
        assert_eq!(parsed.as_deref(), Some("data:image/jpeg;base64,AAAA"));
    }

    #[test]
    fn proxy_response_without_data_url_yields_nothing() {
        assert_eq!(parse_image_response(json!({})), None);
        assert_eq!(parse_image_response(json!({"error": "not found"})), None);
        // A non-string value is as unusable as a missing one.
        assert_eq!(parse_image_response(json!({"dataUrl": 42})), None);
    }

    #[tokio::test]
    async fn unconfigured_client_fails_before_any_network_call() {
        let client = SheetClient::new(SheetConfig::default());
        assert!(!client.is_configured());
        assert!(matches!(
            client.create_user(&UserRecord::default()).await,
            Err(ApiError::Unconfigured)
        ));
        assert!(matches!(client.list_users().await, Err(ApiError::Unconfigured)));
        assert!(matches!(
            client.fetch_image("1AbCDefGhIJ23456789_XYZ").await,
            Err(ApiError::Unconfigured)
        ));
    }
}
