use anyhow::{anyhow, Context, Result};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
        CreateImageRequestArgs, Image, ImageModel, ImageResponseFormat, ImageSize,
    },
    Client,
};
use async_trait::async_trait;

use crate::{
    ChatMessage, ChatRequest, ChatRole, ChatTransport, ImageRequest, ImageTransport, LlmConfig,
};

/// Chat completion and image generation against the OpenAI API.
pub struct OpenAIService {
    client: Client<OpenAIConfig>,
}

impl OpenAIService {
    pub fn new(config: &LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key.clone());
        if let Some(org_id) = &config.org_id {
            openai_config = openai_config.with_org_id(org_id.clone());
        }
        if let Some(api_base) = &config.api_base {
            openai_config = openai_config.with_api_base(api_base.clone());
        }

        let client = Client::with_config(openai_config).with_http_client(reqwest::Client::new());
        Self { client }
    }
}

fn to_openai_message(message: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let message: ChatCompletionRequestMessage = match message.role {
        ChatRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(message.content.clone())
            .build()
            .context("Failed to build system message")?
            .into(),
        ChatRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(message.content.clone())
            .build()
            .context("Failed to build user message")?
            .into(),
    };
    Ok(message)
}

fn image_size(size: &str) -> Result<ImageSize> {
    match size {
        "256x256" => Ok(ImageSize::S256x256),
        "512x512" => Ok(ImageSize::S512x512),
        "1024x1024" => Ok(ImageSize::S1024x1024),
        "1792x1024" => Ok(ImageSize::S1792x1024),
        "1024x1792" => Ok(ImageSize::S1024x1792),
        other => Err(anyhow!("Unsupported image size: {}", other)),
    }
}

#[async_trait]
impl ChatTransport for OpenAIService {
    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        let messages = request
            .messages
            .iter()
            .map(to_openai_message)
            .collect::<Result<Vec<_>>>()?;

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(request.model.clone())
            .temperature(request.temperature)
            .messages(messages)
            .build()
            .context("Failed to build chat completion request")?;

        let response = self
            .client
            .chat()
            .create(chat_request)
            .await
            .context("OpenAI chat completion request failed")?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .context("No content in chat completion response")
    }
}

#[async_trait]
impl ImageTransport for OpenAIService {
    async fn create_image(&self, request: &ImageRequest) -> Result<String> {
        let mut builder = CreateImageRequestArgs::default();
        builder
            .prompt(request.prompt.clone())
            .n(request.count)
            .size(image_size(&request.size)?)
            .response_format(ImageResponseFormat::Url);
        if let Some(model) = &request.model {
            builder.model(ImageModel::Other(model.clone()));
        }
        let image_request = builder
            .build()
            .context("Failed to build image generation request")?;

        let response = self
            .client
            .images()
            .create(image_request)
            .await
            .context("OpenAI image generation request failed")?;

        let image = response
            .data
            .first()
            .context("No images in image generation response")?;

        match image.as_ref() {
            Image::Url { url, .. } => Ok(url.clone()),
            Image::B64Json { .. } => Err(anyhow!("Image generation returned no URL")),
        }
    }
}
