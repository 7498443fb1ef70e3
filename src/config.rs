//! Configuration management for the SoundCloud search proxy.
//!
//! This module handles loading configuration values from environment variables
//! and `.env` files and collects them into an explicit [`Config`] struct that is
//! handed to the token manager and the HTTP handlers. Nothing reads the process
//! environment after startup.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{Error, Result};

/// Default SoundCloud OAuth token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://secure.soundcloud.com/oauth/token";

/// Default SoundCloud API base URL.
pub const DEFAULT_API_URL: &str = "https://api.soundcloud.com";

/// Default bind address of the proxy.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8787";

pub const ENV_CLIENT_ID: &str = "SOUNDCLOUD_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SOUNDCLOUD_CLIENT_SECRET";
pub const ENV_TOKEN_URL: &str = "SOUNDCLOUD_TOKEN_URL";
pub const ENV_API_URL: &str = "SOUNDCLOUD_API_URL";
pub const ENV_SERVER_ADDRESS: &str = "SERVER_ADDRESS";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `scsearch/.env` inside the platform-specific
/// local data directory:
/// - Linux: `~/.local/share/scsearch/.env`
/// - macOS: `~/Library/Application Support/scsearch/.env`
/// - Windows: `%LOCALAPPDATA%/scsearch/.env`
///
/// A missing file is not an error, since edge deployments usually inject the
/// secrets straight into the process environment. Variables that are already
/// set are never overridden.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the `.env`
/// file exists but cannot be parsed.
pub async fn load_env() -> Result<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map_err(|e| Error::Config(format!("cannot load {}: {}", path.display(), e)))
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("scsearch/.env");
    path
}

/// Runtime configuration of the proxy.
///
/// The client secret is deliberately left out of the `Debug` output.
#[derive(Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub api_url: String,
    pub server_address: String,
}

impl Config {
    /// Creates a configuration with the given credentials and default endpoints.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Config {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
        }
    }

    /// Builds the configuration from the process environment.
    ///
    /// `SOUNDCLOUD_CLIENT_ID` and `SOUNDCLOUD_CLIENT_SECRET` are required;
    /// `SOUNDCLOUD_TOKEN_URL`, `SOUNDCLOUD_API_URL` and `SERVER_ADDRESS` fall
    /// back to their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// config::load_env().await?;
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self> {
        let mut config = Config::new(required(ENV_CLIENT_ID)?, required(ENV_CLIENT_SECRET)?);

        if let Some(url) = optional(ENV_TOKEN_URL) {
            config = config.with_token_url(url);
        }
        if let Some(url) = optional(ENV_API_URL) {
            config = config.with_api_url(url);
        }
        if let Some(addr) = optional(ENV_SERVER_ADDRESS) {
            config = config.with_server_address(addr);
        }

        Ok(config)
    }

    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Sets the API base URL. A trailing slash is dropped so paths can be
    /// appended verbatim.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_server_address(mut self, server_address: impl Into<String>) -> Self {
        self.server_address = server_address.into();
        self
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_url", &self.token_url)
            .field("api_url", &self.api_url)
            .field("server_address", &self.server_address)
            .finish()
    }
}

fn required(name: &str) -> Result<String> {
    optional(name).ok_or_else(|| Error::Config(format!("{} must be set", name)))
}

fn optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
