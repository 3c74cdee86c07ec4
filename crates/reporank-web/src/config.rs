//! Configuration loaded from environment variables (and `.env` via dotenvy
//! in `main`).

use std::env;

use secrecy::SecretString;
use thiserror::Error;

use reporank_github::client::GITHUB_API_URL;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Search endpoint to query (overridable for tests)
    pub github_api_url: String,
    /// Credential forwarded to GitHub, if configured
    pub github_token: Option<SecretString>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        let github_api_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| GITHUB_API_URL.to_string());

        let github_token = env::var("GITHUB_ACCESS_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .map(SecretString::from);

        Ok(Self { host, port, github_api_url, github_token })
    }
}
