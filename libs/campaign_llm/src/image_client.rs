use std::sync::Arc;

use crate::{
    shaper::shape, ImageRequest, ImageResult, ImageTransport, LlmConfig, IMAGE_PROMPT_MAX_LENGTH,
};

#[derive(Clone)]
pub struct ImageGenerationClient {
    transport: Arc<dyn ImageTransport + Send + Sync>,
    model: Option<String>,
}

impl ImageGenerationClient {
    pub fn new(transport: Arc<dyn ImageTransport + Send + Sync>, config: &LlmConfig) -> Self {
        Self {
            transport,
            model: config.image_model.clone(),
        }
    }

    /// Requests one 1024x1024 image for `description`, shaped to the prompt limit first.
    pub async fn generate(&self, description: &str) -> ImageResult {
        let prompt = shape(description, IMAGE_PROMPT_MAX_LENGTH);
        let request = ImageRequest::new(prompt, self.model.clone());

        match self.transport.create_image(&request).await {
            Ok(url) => ImageResult::Success(url),
            Err(e) => {
                tracing::error!("Error generating logo image: {:#}", e);
                ImageResult::Failure {
                    cause: format!("{:#}", e),
                }
            }
        }
    }
}
