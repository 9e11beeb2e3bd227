use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{db::AppState, dto::ListResponse, error::ApiError};

use super::repo::ResumeEntry;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/resume", get(list_resume))
}

#[instrument(skip(state))]
pub async fn list_resume(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<ResumeEntry>>, ApiError> {
    let entries = ResumeEntry::list(&state.db).await?;
    Ok(Json(ListResponse::new(entries)))
}
