use crate::{error::ConfigError, DEFAULT_CHAT_MODEL, DEFAULT_TEMPERATURE};

#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    pub api_key: String,
    pub org_id: Option<String>,
    pub api_base: Option<String>,
    pub chat_model: String,
    pub image_model: Option<String>,
    pub temperature: f32,
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            org_id: None,
            api_base: None,
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            image_model: None,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = read("OPENAI_API_KEY").ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            org_id: read("OPENAI_ORG_ID"),
            api_base: read("OPENAI_API_BASE"),
            chat_model: read("OPENAI_CHAT_MODEL").unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            image_model: read("OPENAI_IMAGE_MODEL"),
            temperature: DEFAULT_TEMPERATURE,
        })
    }
}
