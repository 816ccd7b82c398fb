use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DisplayFetchError {
    #[error("Failed to fetch the image from the URL (status {0}).")]
    Status(u16),

    #[error("The URL did not return an image (content type {0}).")]
    NotAnImage(String),

    #[error("The URL returned an empty image.")]
    Empty,

    #[error("Error loading image: {0}")]
    Request(String),
}

/// Confirms a generated image locator serves image bytes before it is rendered.
#[async_trait]
pub trait ImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, DisplayFetchError>;
}

pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpImageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, DisplayFetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DisplayFetchError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Image fetch returned status {}", status);
            return Err(DisplayFetchError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.trim().to_ascii_lowercase().starts_with("image/") {
            tracing::error!("Image fetch returned content type {:?}", content_type);
            return Err(DisplayFetchError::NotAnImage(content_type));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DisplayFetchError::Request(e.to_string()))?;
        if bytes.is_empty() {
            return Err(DisplayFetchError::Empty);
        }

        Ok(bytes.to_vec())
    }
}
