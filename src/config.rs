use crate::{LastFmError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default API endpoint, without scheme.
pub const DEFAULT_BASE_URL: &str = "ws.audioscrobbler.com/2.0/";

pub const ENV_API_KEY: &str = "LASTFM_API_KEY";
pub const ENV_API_SECRET: &str = "LASTFM_API_SECRET";
pub const ENV_BASE_URL: &str = "LASTFM_BASE_URL";
pub const ENV_INSECURE: &str = "LASTFM_INSECURE";

/// Client configuration.
///
/// `base_url` may carry its own scheme (useful for pointing the client at a
/// local stub server); otherwise `https://` is prepended, or `http://` when
/// `secure` is off.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_secure")]
    pub secure: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_secure() -> bool {
    true
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: None,
            base_url: default_base_url(),
            secure: true,
            user_agent: None,
        }
    }

    pub fn with_api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = Some(api_secret.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Read the configuration from `LASTFM_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(ENV_API_KEY)
            .ok_or_else(|| LastFmError::Config(format!("{ENV_API_KEY} is not set")))?;

        let mut config = Self::new(api_key);
        config.api_secret = lookup(ENV_API_SECRET).filter(|s| !s.is_empty());
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|s| !s.is_empty()) {
            config.base_url = base_url;
        }
        if let Some(insecure) = lookup(ENV_INSECURE) {
            config.secure = !matches!(insecure.as_str(), "1" | "true" | "yes");
        }

        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/lastfm-api/config.json`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LastFmError::Config("Cannot determine config directory".to_string()))?;
        Ok(config_dir.join("lastfm-api").join("config.json"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json).map_err(|e| {
            LastFmError::Config(format!("Failed to parse {}: {e}", path.display()))
        })?;
        config.validate()?;

        log::debug!("Configuration loaded from: {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LastFmError::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(path, json)?;

        log::debug!("Configuration saved to: {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(LastFmError::Config("API key is empty".to_string()));
        }
        if self.base_url.trim().is_empty() {
            return Err(LastFmError::Config("Base URL is empty".to_string()));
        }
        Ok(())
    }

    /// Full endpoint URL, scheme included.
    pub fn endpoint(&self) -> String {
        if self.base_url.starts_with("http://") || self.base_url.starts_with("https://") {
            self.base_url.clone()
        } else if self.secure {
            format!("https://{}", self.base_url)
        } else {
            format!("http://{}", self.base_url)
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("secure", &self.secure)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
