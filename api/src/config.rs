//! Endpoint configuration for the spreadsheet web app.

/// Where user records live: a single deployed Apps Script web app URL, plus
/// the optional API key the script checks on writes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
}

impl SheetConfig {
    /// Config pointing at `endpoint`, with no API key.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
        }
    }

    /// Builder method to attach the write API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Read `SHEETBOOK_ENDPOINT` / `SHEETBOOK_API_KEY` from the environment
    /// (and `.env`). An unset endpoint is not an error — it yields an
    /// unconfigured client that fails fast on first use.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            endpoint: std::env::var("SHEETBOOK_ENDPOINT").unwrap_or_default(),
            api_key: std::env::var("SHEETBOOK_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
        }
    }

    /// Whether a remote endpoint has been set at all.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unconfigured() {
        assert!(!SheetConfig::default().is_configured());
        assert!(!SheetConfig::new("   ").is_configured());
    }

    #[test]
    fn endpoint_marks_configured() {
        let config = SheetConfig::new("https://script.google.com/macros/s/abc/exec");
        assert!(config.is_configured());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn api_key_builder() {
        let config = SheetConfig::new("https://example.test/exec").with_api_key("k-123");
        assert_eq!(config.api_key.as_deref(), Some("k-123"));
    }
}
