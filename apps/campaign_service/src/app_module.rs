use std::sync::Arc;

use campaign_llm::{CampaignWorkflow, LlmConfig, OpenAIService};

use crate::{
    image::image_fetcher::{HttpImageFetcher, ImageFetcher},
    session::session_store::SessionStore,
};

#[derive(Clone)]
pub struct AppService {
    pub workflow: CampaignWorkflow,
    pub image_fetcher: Arc<dyn ImageFetcher + Send + Sync>,
}

impl AppService {
    pub fn new(config: &LlmConfig) -> Self {
        let openai_service = Arc::new(OpenAIService::new(config));

        Self {
            workflow: CampaignWorkflow::with_transport(openai_service, config),
            image_fetcher: Arc::new(HttpImageFetcher::new()),
        }
    }

    pub fn with_parts(
        workflow: CampaignWorkflow,
        image_fetcher: Arc<dyn ImageFetcher + Send + Sync>,
    ) -> Self {
        Self {
            workflow,
            image_fetcher,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(service: AppService, session_ttl: chrono::Duration) -> Self {
        Self {
            service,
            sessions: SessionStore::new(session_ttl),
        }
    }
}
