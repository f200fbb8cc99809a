// ABOUTME: Configuration loading and validation for the postboard server.
// ABOUTME: Reads POSTBOARD_* environment variables and parses listener addresses.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_DATA_FILE: &str = "posts.json";
pub const DEFAULT_API_BIND: &str = "0.0.0.0:5002";
pub const DEFAULT_WEB_BIND: &str = "0.0.0.0:5001";

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBind { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct PostboardConfig {
    pub data_file: PathBuf,
    pub api_bind: SocketAddr,
    pub web_bind: SocketAddr,
    /// Explicit API base URL for the frontend page. When unset, it is derived
    /// from the API listener port.
    pub api_url: Option<String>,
}

impl PostboardConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - POSTBOARD_DATA_FILE: posts file (default: posts.json)
    /// - POSTBOARD_API_BIND: API listener address (default: 0.0.0.0:5002)
    /// - POSTBOARD_WEB_BIND: frontend page listener address (default: 0.0.0.0:5001)
    /// - POSTBOARD_API_URL: API base URL used by the frontend page (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup. Empty values
    /// are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let data_file = get("POSTBOARD_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let api_bind = parse_bind(
            "POSTBOARD_API_BIND",
            get("POSTBOARD_API_BIND").unwrap_or_else(|| DEFAULT_API_BIND.to_string()),
        )?;
        let web_bind = parse_bind(
            "POSTBOARD_WEB_BIND",
            get("POSTBOARD_WEB_BIND").unwrap_or_else(|| DEFAULT_WEB_BIND.to_string()),
        )?;

        let api_url = get("POSTBOARD_API_URL");

        Ok(Self {
            data_file,
            api_bind,
            web_bind,
            api_url,
        })
    }

    /// The API base URL the frontend page should call.
    pub fn api_base_url(&self) -> String {
        match &self.api_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.api_bind.port()),
        }
    }
}

fn parse_bind(var: &'static str, value: String) -> Result<SocketAddr, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidBind { var, value })
}
