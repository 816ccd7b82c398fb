use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod error;
pub mod image_client;
pub mod openai;
pub mod shaper;
pub mod text_client;
pub mod workflow;

pub use config::LlmConfig;
pub use error::{ConfigError, ValidationError};
pub use image_client::ImageGenerationClient;
pub use openai::OpenAIService;
pub use text_client::TextGenerationClient;
pub use workflow::{CampaignWorkflow, LogoOutcome};

pub const DEFAULT_CHAT_MODEL: &str = "gpt-4";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const IMAGE_SIZE: &str = "1024x1024";
pub const IMAGE_PROMPT_MAX_LENGTH: usize = 1000;

/// Fixed system-level role the remote model is asked to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    Marketer,
    LogoDesigner,
    Copywriter,
}

impl Persona {
    pub fn system_instruction(&self) -> &'static str {
        match self {
            Persona::Marketer => {
                "You are an expert creative marketer. Create a campaign for the brand the user enters. Respond in markdown format."
            }
            Persona::LogoDesigner => {
                "You are an expert logo designer. Create a description for a logo based on the brand the user enters. Be descriptive and imaginative."
            }
            Persona::Copywriter => {
                "You are a creative copywriter specializing in crafting personalized, engaging email content. Generate an email based on the details the user provides. Make it captivating and tailored to the target audience."
            }
        }
    }

    pub fn artifact(&self) -> &'static str {
        match self {
            Persona::Marketer => "campaign",
            Persona::LogoDesigner => "logo description",
            Persona::Copywriter => "personalized email",
        }
    }

    pub fn failure_message(&self) -> String {
        format!("Failed to generate {}. Please try again later.", self.artifact())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub user_prompt: String,
}

impl GenerationRequest {
    pub fn new(persona: Persona, user_prompt: &str) -> Self {
        Self {
            system_instruction: persona.system_instruction().to_string(),
            user_prompt: user_prompt.to_string(),
        }
    }

    pub fn into_messages(self) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: ChatRole::System,
                content: self.system_instruction,
            },
            ChatMessage {
                role: ChatRole::User,
                content: self.user_prompt,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Wire-level chat completion request handed to a [`ChatTransport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRequest {
    pub prompt: String,
    pub count: u8,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ImageRequest {
    pub fn new(prompt: String, model: Option<String>) -> Self {
        Self {
            prompt,
            count: 1,
            size: IMAGE_SIZE.to_string(),
            model,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Success(String),
    /// `message` is safe to show to end users, `cause` is diagnostic only.
    Failure { message: String, cause: String },
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success(_))
    }

    /// Text to render: the generated content or the fixed fallback message.
    pub fn display_text(&self) -> &str {
        match self {
            GenerationResult::Success(text) => text,
            GenerationResult::Failure { message, .. } => message,
        }
    }

    pub fn into_display_text(self) -> String {
        match self {
            GenerationResult::Success(text) => text,
            GenerationResult::Failure { message, .. } => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageResult {
    Success(String),
    Failure { cause: String },
}

impl ImageResult {
    pub fn locator(&self) -> Option<&str> {
        match self {
            ImageResult::Success(url) => Some(url),
            ImageResult::Failure { .. } => None,
        }
    }

    pub fn into_locator(self) -> Option<String> {
        match self {
            ImageResult::Success(url) => Some(url),
            ImageResult::Failure { .. } => None,
        }
    }
}

#[async_trait]
pub trait ChatTransport {
    /// Returns the content of the first completion choice.
    async fn complete(&self, request: &ChatRequest) -> Result<String>;
}

#[async_trait]
pub trait ImageTransport {
    /// Returns the URL of the first generated image.
    async fn create_image(&self, request: &ImageRequest) -> Result<String>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    use super::{ChatRequest, ChatTransport, ImageRequest, ImageTransport};

    /// Replays scripted replies in order; `Err` entries become transport failures.
    #[derive(Default)]
    pub struct StubTransport {
        chat_replies: Mutex<VecDeque<Result<String, String>>>,
        image_replies: Mutex<VecDeque<Result<String, String>>>,
        pub chat_requests: Mutex<Vec<ChatRequest>>,
        pub image_requests: Mutex<Vec<ImageRequest>>,
        chat_calls: AtomicUsize,
        image_calls: AtomicUsize,
    }

    impl StubTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_chat_reply(self, reply: Result<&str, &str>) -> Self {
            self.chat_replies
                .lock()
                .expect("lock poisoned")
                .push_back(reply.map(str::to_string).map_err(str::to_string));
            self
        }

        pub fn with_image_reply(self, reply: Result<&str, &str>) -> Self {
            self.image_replies
                .lock()
                .expect("lock poisoned")
                .push_back(reply.map(str::to_string).map_err(str::to_string));
            self
        }

        pub fn chat_calls(&self) -> usize {
            self.chat_calls.load(Ordering::SeqCst)
        }

        pub fn image_calls(&self) -> usize {
            self.image_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChatTransport for StubTransport {
        async fn complete(&self, request: &ChatRequest) -> Result<String> {
            self.chat_calls.fetch_add(1, Ordering::SeqCst);
            self.chat_requests
                .lock()
                .expect("lock poisoned")
                .push(request.clone());
            match self.chat_replies.lock().expect("lock poisoned").pop_front() {
                Some(Ok(text)) => Ok(text),
                Some(Err(e)) => Err(anyhow!(e)),
                None => Err(anyhow!("no chat reply scripted")),
            }
        }
    }

    #[async_trait]
    impl ImageTransport for StubTransport {
        async fn create_image(&self, request: &ImageRequest) -> Result<String> {
            self.image_calls.fetch_add(1, Ordering::SeqCst);
            self.image_requests
                .lock()
                .expect("lock poisoned")
                .push(request.clone());
            match self.image_replies.lock().expect("lock poisoned").pop_front() {
                Some(Ok(url)) => Ok(url),
                Some(Err(e)) => Err(anyhow!(e)),
                None => Err(anyhow!("no image reply scripted")),
            }
        }
    }
}
