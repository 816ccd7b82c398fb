use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use super::session_store::SessionDisplayState;
use crate::{app_module::AppState, error::ApiError};

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

pub fn session_router() -> Router {
    Router::new()
        .route("/", post(create_session))
        .route("/:id", get(get_session))
}

pub async fn create_session(
    Extension(ctx): Extension<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let session_id = ctx.sessions.create();
    (StatusCode::CREATED, Json(CreateSessionResponse { session_id }))
}

pub async fn get_session(
    Extension(ctx): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionDisplayState>, ApiError> {
    ctx.sessions
        .get(&id)
        .map(Json)
        .ok_or(ApiError::SessionNotFound(id))
}
