use std::{env, time::Duration};

use campaign_llm::{ConfigError, LlmConfig};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 180;
const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub environment: String,
    pub bind_address: String,
    pub port: u16,
    pub request_timeout: Duration,
    pub session_ttl: chrono::Duration,
    pub llm: LlmConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let llm = LlmConfig::from_lookup(&lookup)?;

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let request_timeout_secs =
            positive_secs(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;

        let session_ttl_secs = positive_secs(&lookup, "SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?;
        let session_ttl = i64::try_from(session_ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .ok_or(ConfigError::Invalid {
                key: "SESSION_TTL_SECS".to_string(),
                value: session_ttl_secs.to_string(),
            })?;

        Ok(Self {
            environment: lookup("APP_ENVIRONMENT").unwrap_or_else(|| "dev".to_string()),
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port,
            request_timeout: Duration::from_secs(request_timeout_secs),
            session_ttl,
            llm,
        })
    }

    pub fn is_dev(&self) -> bool {
        self.environment == "dev"
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

fn positive_secs<F>(lookup: &F, key: &str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::Invalid {
                key: key.to_string(),
                value,
            }),
        None => Ok(default),
    }
}
