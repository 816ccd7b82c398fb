use std::sync::Arc;

use crate::{ChatRequest, ChatTransport, GenerationRequest, GenerationResult, LlmConfig, Persona};

/// Sends a persona-framed prompt to the chat transport.
///
/// Transport failures are logged and downgraded to a fixed, persona-specific
/// fallback message; nothing is retried.
#[derive(Clone)]
pub struct TextGenerationClient {
    transport: Arc<dyn ChatTransport + Send + Sync>,
    model: String,
    temperature: f32,
}

impl TextGenerationClient {
    pub fn new(transport: Arc<dyn ChatTransport + Send + Sync>, config: &LlmConfig) -> Self {
        Self {
            transport,
            model: config.chat_model.clone(),
            temperature: config.temperature,
        }
    }

    pub async fn generate(&self, persona: Persona, user_prompt: &str) -> GenerationResult {
        let request = ChatRequest {
            model: self.model.clone(),
            temperature: self.temperature,
            messages: GenerationRequest::new(persona, user_prompt).into_messages(),
        };

        match self.transport.complete(&request).await {
            Ok(text) => GenerationResult::Success(text),
            Err(e) => {
                tracing::error!("Error generating {}: {:#}", persona.artifact(), e);
                GenerationResult::Failure {
                    message: persona.failure_message(),
                    cause: format!("{:#}", e),
                }
            }
        }
    }
}
