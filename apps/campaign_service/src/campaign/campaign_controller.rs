use axum::{routing::post, Extension, Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{app_module::AppState, error::ApiError};

const IMAGE_FAILURE_MESSAGE: &str = "Failed to generate logo image. Please try again later.";

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct CampaignResponse {
    pub campaign: String,
    pub generated: bool,
}

#[derive(Debug, Serialize)]
pub struct LogoResponse {
    pub description: String,
    pub generated: bool,
    pub image_url: Option<String>,
    pub image_error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EmailResponse {
    pub email: String,
    pub generated: bool,
}

pub fn campaign_router() -> Router {
    Router::new()
        .route("/generate", post(generate_campaign))
        .route("/logo", post(generate_logo))
        .route("/email", post(generate_email))
}

fn ensure_session(ctx: &AppState, session_id: Option<Uuid>) -> Result<(), ApiError> {
    match session_id {
        Some(id) if ctx.sessions.get(&id).is_none() => Err(ApiError::SessionNotFound(id)),
        _ => Ok(()),
    }
}

pub async fn generate_campaign(
    Extension(ctx): Extension<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<CampaignResponse>, ApiError> {
    ensure_session(&ctx, request.session_id)?;

    let result = ctx
        .service
        .workflow
        .generate_campaign(&request.prompt)
        .await?;
    let generated = result.is_success();
    let campaign = result.into_display_text();

    if let Some(id) = request.session_id {
        ctx.sessions
            .update(&id, |state| state.campaign_text = campaign.clone());
    }

    Ok(Json(CampaignResponse {
        campaign,
        generated,
    }))
}

pub async fn generate_logo(
    Extension(ctx): Extension<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<LogoResponse>, ApiError> {
    ensure_session(&ctx, request.session_id)?;

    let outcome = ctx.service.workflow.generate_logo(&request.prompt).await?;
    let generated = outcome.description.is_success();
    let description = outcome.description.into_display_text();
    let image_url = outcome.image.into_locator();

    if let Some(id) = request.session_id {
        ctx.sessions.update(&id, |state| {
            state.logo_description = description.clone();
            state.logo_image_url = image_url.clone();
        });
    }

    // The locator stays stored even when it cannot be fetched for display.
    let image_error = match &image_url {
        Some(url) => match ctx.service.image_fetcher.fetch(url).await {
            Ok(_) => None,
            Err(e) => {
                tracing::error!("Error loading generated logo image: {}", e);
                Some(e.to_string())
            }
        },
        None => Some(IMAGE_FAILURE_MESSAGE.to_string()),
    };

    Ok(Json(LogoResponse {
        description,
        generated,
        image_url,
        image_error,
    }))
}

pub async fn generate_email(
    Extension(ctx): Extension<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<EmailResponse>, ApiError> {
    ensure_session(&ctx, request.session_id)?;

    let result = ctx
        .service
        .workflow
        .generate_personalized_email(&request.prompt)
        .await?;
    let generated = result.is_success();
    let email = result.into_display_text();

    if let Some(id) = request.session_id {
        ctx.sessions
            .update(&id, |state| state.email_content = email.clone());
    }

    Ok(Json(EmailResponse { email, generated }))
}
