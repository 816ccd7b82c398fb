use std::sync::Arc;

use crate::{
    error::ValidationError, ChatTransport, GenerationResult, ImageGenerationClient, ImageResult,
    ImageTransport, LlmConfig, Persona, TextGenerationClient,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoOutcome {
    pub description: GenerationResult,
    pub image: ImageResult,
}

/// The three user-triggered generation use cases. Holds no per-call state.
#[derive(Clone)]
pub struct CampaignWorkflow {
    text_client: TextGenerationClient,
    image_client: ImageGenerationClient,
}

impl CampaignWorkflow {
    pub fn new(text_client: TextGenerationClient, image_client: ImageGenerationClient) -> Self {
        Self {
            text_client,
            image_client,
        }
    }

    /// Wires both clients to a single backend that speaks chat and images.
    pub fn with_transport<T>(transport: Arc<T>, config: &LlmConfig) -> Self
    where
        T: ChatTransport + ImageTransport + Send + Sync + 'static,
    {
        Self::new(
            TextGenerationClient::new(transport.clone(), config),
            ImageGenerationClient::new(transport, config),
        )
    }

    pub async fn generate_campaign(
        &self,
        brand_prompt: &str,
    ) -> Result<GenerationResult, ValidationError> {
        require_text(brand_prompt, ValidationError::EmptyBrandPrompt)?;
        tracing::info!("Generating campaign");
        Ok(self.text_client.generate(Persona::Marketer, brand_prompt).await)
    }

    /// Produces a logo description, then an image for it.
    ///
    /// The description is forwarded to image generation even when it is the
    /// fallback failure text.
    pub async fn generate_logo(&self, brand_prompt: &str) -> Result<LogoOutcome, ValidationError> {
        require_text(brand_prompt, ValidationError::EmptyLogoPrompt)?;
        tracing::info!("Generating logo description");
        let description = self
            .text_client
            .generate(Persona::LogoDesigner, brand_prompt)
            .await;

        if !description.is_success() {
            tracing::warn!("Logo description failed, using fallback text as image prompt");
        }

        tracing::info!("Generating logo image");
        let image = self.image_client.generate(description.display_text()).await;

        Ok(LogoOutcome { description, image })
    }

    pub async fn generate_personalized_email(
        &self,
        brand_and_audience_prompt: &str,
    ) -> Result<GenerationResult, ValidationError> {
        require_text(brand_and_audience_prompt, ValidationError::EmptyEmailPrompt)?;
        tracing::info!("Generating personalized email");
        Ok(self
            .text_client
            .generate(Persona::Copywriter, brand_and_audience_prompt)
            .await)
    }
}

fn require_text(text: &str, error: ValidationError) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        Err(error)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubTransport;

    fn workflow(stub: &Arc<StubTransport>) -> CampaignWorkflow {
        CampaignWorkflow::with_transport(stub.clone(), &LlmConfig::new("sk-test"))
    }

    #[tokio::test]
    async fn test_blank_input_is_rejected_without_network_calls() {
        let stub = Arc::new(StubTransport::new());
        let workflow = workflow(&stub);

        for input in ["", "   ", "\n\t "] {
            assert_eq!(
                workflow.generate_campaign(input).await,
                Err(ValidationError::EmptyBrandPrompt)
            );
            assert_eq!(
                workflow.generate_logo(input).await,
                Err(ValidationError::EmptyLogoPrompt)
            );
            assert_eq!(
                workflow.generate_personalized_email(input).await,
                Err(ValidationError::EmptyEmailPrompt)
            );
        }

        assert_eq!(stub.chat_calls(), 0);
        assert_eq!(stub.image_calls(), 0);
    }

    #[tokio::test]
    async fn test_campaign_failure_returns_fallback() {
        let stub = Arc::new(StubTransport::new().with_chat_reply(Err("connection refused")));
        let result = workflow(&stub).generate_campaign("Acme Co").await.unwrap();

        assert_eq!(
            result.display_text(),
            "Failed to generate campaign. Please try again later."
        );
        assert!(!result.display_text().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_logo_returns_description_and_locator() {
        let stub = Arc::new(
            StubTransport::new()
                .with_chat_reply(Ok("Acme is bold and bright."))
                .with_image_reply(Ok("https://img.example/acme.png")),
        );
        let outcome = workflow(&stub)
            .generate_logo("Acme Co - bold branding")
            .await
            .unwrap();

        assert_eq!(
            outcome.description,
            GenerationResult::Success("Acme is bold and bright.".to_string())
        );
        assert_eq!(
            outcome.image,
            ImageResult::Success("https://img.example/acme.png".to_string())
        );
        let image_requests = stub.image_requests.lock().unwrap();
        assert_eq!(image_requests[0].prompt, "Acme is bold and bright.");
    }

    #[tokio::test]
    async fn test_logo_image_failure_keeps_description() {
        let stub = Arc::new(
            StubTransport::new()
                .with_chat_reply(Ok("Acme is bold and bright."))
                .with_image_reply(Err("rate limited")),
        );
        let outcome = workflow(&stub).generate_logo("Acme Co").await.unwrap();

        assert_eq!(outcome.description.display_text(), "Acme is bold and bright.");
        assert_eq!(outcome.image.locator(), None);
    }

    #[tokio::test]
    async fn test_logo_fallback_text_is_sent_to_image_generation() {
        let stub = Arc::new(
            StubTransport::new()
                .with_chat_reply(Err("timeout"))
                .with_image_reply(Ok("https://img.example/fallback.png")),
        );
        let outcome = workflow(&stub).generate_logo("Acme Co").await.unwrap();

        assert!(!outcome.description.is_success());
        assert_eq!(stub.image_calls(), 1);
        let image_requests = stub.image_requests.lock().unwrap();
        assert_eq!(
            image_requests[0].prompt,
            "Failed to generate logo description. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_email_text_is_returned_unmodified() {
        let stub = Arc::new(StubTransport::new().with_chat_reply(Ok("Dear student, ...")));
        let result = workflow(&stub)
            .generate_personalized_email("Acme - launching tea - audience: students")
            .await
            .unwrap();

        assert_eq!(result, GenerationResult::Success("Dear student, ...".to_string()));
        let requests = stub.chat_requests.lock().unwrap();
        assert_eq!(
            requests[0].messages[1].content,
            "Acme - launching tea - audience: students"
        );
    }

    #[tokio::test]
    async fn test_sequential_calls_are_independent() {
        let stub = Arc::new(
            StubTransport::new()
                .with_chat_reply(Ok("first campaign"))
                .with_chat_reply(Ok("second campaign")),
        );
        let workflow = workflow(&stub);

        let first = workflow.generate_campaign("Acme").await.unwrap();
        let second = workflow.generate_campaign("Acme").await.unwrap();

        assert_eq!(first.display_text(), "first campaign");
        assert_eq!(second.display_text(), "second campaign");
        assert_eq!(stub.chat_calls(), 2);
    }
}
