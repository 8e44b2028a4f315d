use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnvConfigError {
    #[error("failed to parse dashboard config: {0}")]
    Parse(String),
    #[error("invalid value '{value}' for flag {key}")]
    InvalidFlag { key: String, value: String },
}

/// Prefix of every override key, e.g. `SITEWATCH_DEBUG`.
pub const ENV_PREFIX: &str = "SITEWATCH_";

/// Process-wide dashboard configuration.
///
/// Built once at start-up (TOML document + key overrides) and handed to
/// consumers by reference.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EnvConfig {
    pub api_base_url: String,
    pub ws_url: String,
    pub auth_provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_secret: Option<String>,
    pub enable_realtime: bool,
    pub enable_notifications: bool,
    pub enable_analytics: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentry_dsn: Option<String>,
    pub debug: bool,
    pub mock_data: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            ws_url: "ws://localhost:8080/ws".to_string(),
            auth_provider: "local".to_string(),
            jwt_secret: None,
            enable_realtime: false,
            enable_notifications: true,
            enable_analytics: false,
            analytics_id: None,
            sentry_dsn: None,
            debug: false,
            mock_data: false,
        }
    }
}

// Secrets stay out of logs
impl fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvConfig")
            .field("api_base_url", &self.api_base_url)
            .field("ws_url", &self.ws_url)
            .field("auth_provider", &self.auth_provider)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("enable_realtime", &self.enable_realtime)
            .field("enable_notifications", &self.enable_notifications)
            .field("enable_analytics", &self.enable_analytics)
            .field("analytics_id", &self.analytics_id)
            .field("sentry_dsn", &self.sentry_dsn.as_ref().map(|_| "<redacted>"))
            .field("debug", &self.debug)
            .field("mock_data", &self.mock_data)
            .finish()
    }
}

impl EnvConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, EnvConfigError> {
        toml::from_str(content).map_err(|error| EnvConfigError::Parse(error.to_string()))
    }

    /// Applies `SITEWATCH_*` overrides provided by `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, EnvConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));
        let flag = |name: &str| -> Result<Option<bool>, EnvConfigError> {
            let key = format!("{ENV_PREFIX}{name}");
            lookup(&key).map(|value| parse_flag(&key, &value)).transpose()
        };

        if let Some(value) = text("API_BASE_URL") {
            self.api_base_url = value;
        }
        if let Some(value) = text("WS_URL") {
            self.ws_url = value;
        }
        if let Some(value) = text("AUTH_PROVIDER") {
            self.auth_provider = value;
        }
        if let Some(value) = text("JWT_SECRET") {
            self.jwt_secret = non_empty(value);
        }
        if let Some(value) = text("ANALYTICS_ID") {
            self.analytics_id = non_empty(value);
        }
        if let Some(value) = text("SENTRY_DSN") {
            self.sentry_dsn = non_empty(value);
        }
        if let Some(value) = flag("ENABLE_REALTIME")? {
            self.enable_realtime = value;
        }
        if let Some(value) = flag("ENABLE_NOTIFICATIONS")? {
            self.enable_notifications = value;
        }
        if let Some(value) = flag("ENABLE_ANALYTICS")? {
            self.enable_analytics = value;
        }
        if let Some(value) = flag("DEBUG")? {
            self.debug = value;
        }
        if let Some(value) = flag("MOCK_DATA")? {
            self.mock_data = value;
        }
        Ok(self)
    }

    /// Analytics run only when enabled and an id is configured
    pub fn analytics_enabled(&self) -> bool {
        self.enable_analytics && self.analytics_id.is_some()
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

fn parse_flag(key: &str, value: &str) -> Result<bool, EnvConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(EnvConfigError::InvalidFlag {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
