//! # Client configuration: `notes.toml`
//!
//! Everything the client needs to know about the remote API and its own
//! behaviour, in one serde document. Every field has a default, so a missing or
//! empty file is equivalent to [`ClientConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://note-sigma-black.vercel.app/api/v1"
//! token_header = "token"
//! token_prefix = "3b8ny__"
//!
//! [session]
//! storage_key = "token"
//!
//! [forms]
//! error_clear_secs = 3
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with builder helpers, TOML (de)serialisation and build-time overrides. |
//! | [`ApiConfig`] | Base URL of the versioned API and the custom auth header convention. |
//! | [`SessionConfig`] | Key under which the token is persisted. |
//! | [`FormsConfig`] | How long field validation messages stay visible. |
//!
//! ## Build-time overrides
//!
//! The web build has no process environment or filesystem at runtime, so
//! [`ClientConfig::from_build_env`] reads `NOTES_API_BASE_URL` and
//! `NOTES_TOKEN_PREFIX` with `option_env!` when the crate is compiled.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::session::DEFAULT_TOKEN_KEY;

pub const DEFAULT_BASE_URL: &str = "https://note-sigma-black.vercel.app/api/v1";
pub const DEFAULT_TOKEN_HEADER: &str = "token";
pub const DEFAULT_TOKEN_PREFIX: &str = "3b8ny__";

/// Top-level configuration stored in `notes.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub forms: FormsConfig,
}

/// Remote API location and auth header convention.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Versioned API root, e.g. `https://host/api/v1`. A trailing slash is ignored.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Name of the header carrying the session token.
    #[serde(default = "default_token_header")]
    pub token_header: String,
    /// Literal prepended to the raw token in the auth header.
    #[serde(default = "default_token_prefix")]
    pub token_prefix: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Seconds before an uncorrected field error disappears.
    #[serde(default = "default_error_clear_secs")]
    pub error_clear_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_token_header() -> String {
    DEFAULT_TOKEN_HEADER.to_string()
}

fn default_token_prefix() -> String {
    DEFAULT_TOKEN_PREFIX.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

fn default_error_clear_secs() -> u64 {
    3
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_header: default_token_header(),
            token_prefix: default_token_prefix(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            error_clear_secs: default_error_clear_secs(),
        }
    }
}

impl ApiConfig {
    /// Join `path` onto the base URL: `endpoint("/notes")` → `<base>/notes`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Value of the auth header for a raw session token.
    pub fn token_value(&self, token: &str) -> String {
        format!("{}{}", self.token_prefix, token)
    }
}

impl FormsConfig {
    pub fn error_clear_delay(&self) -> Duration {
        Duration::from_secs(self.error_clear_secs)
    }
}

impl ClientConfig {
    /// Default config pointed at another API root.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Builder method to set the API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Builder method to set the auth header prefix.
    pub fn with_token_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api.token_prefix = prefix.into();
        self
    }

    /// Builder method to set the field error display time.
    pub fn with_error_clear_secs(mut self, secs: u64) -> Self {
        self.forms.error_clear_secs = secs;
        self
    }

    /// Defaults, overridden by variables present when the crate was compiled.
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("NOTES_API_BASE_URL").filter(|v| !v.is_empty()) {
            config = config.with_base_url(url);
        }
        if let Some(prefix) = option_env!("NOTES_TOKEN_PREFIX") {
            config = config.with_token_prefix(prefix);
        }
        config
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "notes.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.token_header, "token");
        assert_eq!(config.api.token_prefix, "3b8ny__");
        assert_eq!(config.session.storage_key, "token");
        assert_eq!(config.forms.error_clear_delay(), Duration::from_secs(3));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ClientConfig::from_toml("").unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:3000/api/v1"

            [forms]
            error_clear_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000/api/v1");
        assert_eq!(config.api.token_prefix, DEFAULT_TOKEN_PREFIX);
        assert_eq!(config.session.storage_key, "token");
        assert_eq!(config.forms.error_clear_secs, 5);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("http://127.0.0.1:8080/api/v1")
            .with_token_prefix("x_")
            .with_error_clear_secs(10);
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_endpoint_joins_single_slash() {
        let api = ApiConfig {
            base_url: "http://host/api/v1/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(api.endpoint("/notes"), "http://host/api/v1/notes");
        assert_eq!(api.endpoint("users/signIn"), "http://host/api/v1/users/signIn");
    }

    #[test]
    fn test_token_value_uses_prefix() {
        let api = ApiConfig::default();
        assert_eq!(api.token_value("abc"), "3b8ny__abc");
    }
}
