use anyhow::{anyhow, Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Runtime configuration, loaded once at startup from the process
/// environment and passed around as an immutable value.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port (`PORT`, default 8080).
    pub port: u16,
    /// Credential for the completion API (`OPENAI_API_KEY`, required).
    pub openai_api_key: String,
    /// Base URL of the completion API (`OPENAI_BASE_URL`, default
    /// `https://api.openai.com/v1`).
    pub openai_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails when `OPENAI_API_KEY` is unset or `PORT` is not a valid port
    /// number, so startup aborts before any socket is bound.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var("OPENAI_API_KEY").ok(),
            std::env::var("OPENAI_BASE_URL").ok(),
        )
    }

    fn from_vars(
        port: Option<String>,
        openai_api_key: Option<String>,
        openai_base_url: Option<String>,
    ) -> Result<Self> {
        let port = match port {
            Some(value) => value
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {value}"))?,
            None => DEFAULT_PORT,
        };

        let openai_api_key =
            openai_api_key.ok_or_else(|| anyhow!("OPENAI_API_KEY is not set"))?;

        let openai_base_url = openai_base_url
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            port,
            openai_api_key,
            openai_base_url,
        })
    }
}
