use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid configuration value for {key}: {value}")]
    Invalid { key: String, value: String },
}

/// Rejected user input. The display text is shown to the user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a brand name and description.")]
    EmptyBrandPrompt,

    #[error("Please enter a brand name and description.")]
    EmptyLogoPrompt,

    #[error("Please enter your brand, product details, and target audience.")]
    EmptyEmailPrompt,
}
