use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    db::AppState,
    dto::{ListResponse, MessageResponse},
    error::ApiError,
};

use super::dto::{CreateSkillRequest, SkillFilter};
use super::repo::Skill;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/skills", get(list_skills))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/skills", post(create_skill))
        .route("/skills/:id", delete(delete_skill))
}

#[instrument(skip(state, payload))]
pub async fn create_skill(
    State(state): State<AppState>,
    AuthUser(_email): AuthUser,
    Json(payload): Json<CreateSkillRequest>,
) -> Result<(StatusCode, Json<Skill>), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::Validation("Skill name is required".into()));
    }

    let skill = Skill::create(
        &state.db,
        payload.name.trim(),
        payload.level,
        payload.icon.as_deref(),
        payload.priority.as_deref(),
    )
    .await?;

    info!(skill_id = %skill.id, "skill created");
    Ok((StatusCode::CREATED, Json(skill)))
}

#[instrument(skip(state))]
pub async fn list_skills(
    State(state): State<AppState>,
    Query(filter): Query<SkillFilter>,
) -> Result<Json<ListResponse<Skill>>, ApiError> {
    let skills = Skill::list(&state.db, filter.priority.as_deref()).await?;
    Ok(Json(ListResponse::new(skills)))
}

#[instrument(skip(state))]
pub async fn delete_skill(
    State(state): State<AppState>,
    AuthUser(_email): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !Skill::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Skill"));
    }
    info!(skill_id = %id, "skill deleted");
    Ok(Json(MessageResponse::ok("Skill deleted")))
}
