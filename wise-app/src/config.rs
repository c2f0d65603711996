//! Configuration loading from environment.

use std::env;

/// Application configuration, built once at process start.
pub struct Config {
    pub port: u16,
    pub api_token: String,
    pub sandbox: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "14101".to_string())
            .parse()?;

        let api_token = env::var("WISE_API_TOKEN")
            .map_err(|_| anyhow::anyhow!("WISE_API_TOKEN environment variable is required"))?;

        let sandbox = env::var("WISE_IS_SANDBOX")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        Ok(Self {
            port,
            api_token,
            sandbox,
        })
    }
}
