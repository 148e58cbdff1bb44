use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub google_api_key: SecretString,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    /// Loads configuration from the environment. The Gemini API key is
    /// required; without it the generation backend cannot be reached,
    /// so startup fails fast with a clear diagnostic instead of
    /// serving requests that can only error out.
    pub fn from_env() -> AppResult<Self> {
        let google_api_key = env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(SecretString::from)
            .ok_or_else(|| {
                AppError::Config(
                    "GOOGLE_API_KEY is not set. Set it in the environment or a .env file."
                        .to_string(),
                )
            })?;

        Ok(Self {
            google_api_key,
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            google_api_key: SecretString::from("test_api_key".to_string()),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
