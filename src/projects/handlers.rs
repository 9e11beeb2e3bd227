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

use super::dto::{CreateProjectRequest, ProjectFilter};
use super::repo::{NewProject, Project};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/projects", get(list_projects))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", post(create_project))
        .route("/projects/:id", delete(delete_project))
}

#[instrument(skip(state, payload))]
pub async fn create_project(
    State(state): State<AppState>,
    AuthUser(_email): AuthUser,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::Validation("Project title is required".into()));
    }

    let project = Project::create(
        &state.db,
        NewProject {
            title: payload.title.trim(),
            description: payload.description.as_deref(),
            image: payload.image.as_deref(),
            live_url: payload.live_url.as_deref(),
            repo_url: payload.repo_url.as_deref(),
            priority: payload.priority.as_deref(),
        },
    )
    .await?;

    info!(project_id = %project.id, "project created");
    Ok((StatusCode::CREATED, Json(project)))
}

#[instrument(skip(state))]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> Result<Json<ListResponse<Project>>, ApiError> {
    let projects = Project::list(&state.db, filter.priority.as_deref()).await?;
    Ok(Json(ListResponse::new(projects)))
}

#[instrument(skip(state))]
pub async fn delete_project(
    State(state): State<AppState>,
    AuthUser(_email): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !Project::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Project"));
    }
    info!(project_id = %id, "project deleted");
    Ok(Json(MessageResponse::ok("Project deleted")))
}
