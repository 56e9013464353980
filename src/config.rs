use std::env;
use std::time::Duration;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

const DEFAULT_API_KEY: &str = "dummy-key";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_api_base: Option<String>,
    pub openai_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub provider_timeout_secs: u64,
    pub cors_allowed_origins: Vec<String>,
    pub app_env: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string()),
            ),
            openai_api_base: env::var("OPENAI_API_BASE")
                .ok()
                .filter(|base| !base.trim().is_empty()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            provider_timeout_secs: parse_timeout_secs(env::var("PROVIDER_TIMEOUT_SECS").ok()),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        }
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Rejects configuration that would silently degrade every dialogue to a fallback.
    pub fn validate_for_production(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        let api_key = self.openai_api_key.expose_secret();

        if api_key == DEFAULT_API_KEY || api_key.trim().is_empty() {
            return Err(AppError::InternalError(
                "OPENAI_API_KEY is using the default value! Set OPENAI_API_KEY to a real provider key."
                    .to_string(),
            ));
        }

        if self.provider_timeout_secs == 0 {
            return Err(AppError::InternalError(
                "PROVIDER_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("test-api-key".to_string()),
            openai_api_base: None,
            openai_model: "gpt-4o-mini".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            provider_timeout_secs: 5,
            cors_allowed_origins: Vec::new(),
            app_env: "test".to_string(),
        }
    }
}

/// Zero or unparsable values would make every provider call time out at once.
fn parse_timeout_secs(raw: Option<String>) -> u64 {
    raw.and_then(|t| t.trim().parse().ok())
        .filter(|secs: &u64| *secs > 0)
        .unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
