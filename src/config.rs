//! Gateway configuration
//!
//! Endpoint and credential for the AI backend, fixed at process start and
//! passed by reference into the gateway constructor.

use crate::{Error, Result};
use std::fmt;

/// AI backend settings. Built once at startup; read-only afterwards.
#[derive(Clone)]
pub struct Config {
    /// Full `generateContent` endpoint URL, without the `?key=` credential.
    pub api_url: String,
    pub api_key: String,
}

impl Config {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Load settings from `GEMINI_API_URL` and `GEMINI_API_KEY`.
    ///
    /// Both are required; there is no built-in default endpoint.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_url: std::env::var("GEMINI_API_URL")
                .map_err(|_| Error::Config("GEMINI_API_URL not set".to_string()))?,
            api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| Error::Config("GEMINI_API_KEY not set".to_string()))?,
        })
    }
}

// The API key must never reach logs; Debug prints a placeholder instead.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::new("https://example.com/v1:generateContent", "secret-key");
        let output = format!("{:?}", config);
        assert!(!output.contains("secret-key"));
        assert!(output.contains("<redacted>"));
    }

    #[test]
    fn test_from_env_requires_both_settings() {
        std::env::remove_var("GEMINI_API_URL");
        std::env::remove_var("GEMINI_API_KEY");
        assert!(matches!(Config::from_env(), Err(Error::Config(_))));

        std::env::set_var("GEMINI_API_URL", "https://example.com/v1:generateContent");
        assert!(matches!(Config::from_env(), Err(Error::Config(_))));

        std::env::set_var("GEMINI_API_KEY", "test-key");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_url, "https://example.com/v1:generateContent");
        assert_eq!(config.api_key, "test-key");

        std::env::remove_var("GEMINI_API_URL");
        std::env::remove_var("GEMINI_API_KEY");
    }
}
