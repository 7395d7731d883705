//! Client configuration: base URL and credentials.
//!
//! An auth string containing `:` is read as `user:password` for basic auth;
//! anything else non-empty is an API key sent as a bearer token.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{ApiError, Result};

/// Environment variable holding the Grafana base URL.
pub const URL_ENV: &str = "GRAFANA_URL";

/// Environment variable holding the auth string (`user:password` or API key).
pub const AUTH_ENV: &str = "GRAFANA_AUTH";

#[derive(Clone, PartialEq, Eq, Default)]
pub enum Credentials {
    #[default]
    None,
    Basic { username: String, password: String },
    ApiKey(String),
}

impl Credentials {
    pub fn parse(auth: &str) -> Self {
        if auth.is_empty() {
            return Credentials::None;
        }
        match auth.split_once(':') {
            Some((username, password)) => Credentials::Basic {
                username: username.to_string(),
                password: password.to_string(),
            },
            None => Credentials::ApiKey(auth.to_string()),
        }
    }

    /// Value for the `Authorization` header, if any.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Credentials::None => None,
            Credentials::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{username}:{password}"));
                Some(format!("Basic {encoded}"))
            }
            Credentials::ApiKey(key) => Some(format!("Bearer {key}")),
        }
    }
}

// Secrets never reach logs through `{:?}`.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::None => f.write_str("None"),
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Credentials::ApiKey(_) => f.write_str("ApiKey(<redacted>)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    credentials: Credentials,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: Credentials::None,
        }
    }

    /// Attach credentials parsed from an auth string.
    pub fn with_auth(mut self, auth: &str) -> Self {
        self.credentials = Credentials::parse(auth);
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Read `GRAFANA_URL` (required) and `GRAFANA_AUTH` (optional).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ApiError::Config(format!("{URL_ENV} is not set")))?;
        let config = Self::new(base_url.trim());
        Ok(match lookup(AUTH_ENV) {
            Some(auth) => config.with_auth(&auth),
            None => config,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}
