use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
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

use super::dto::{BlogPostFilter, CreateBlogPostRequest, UpdateBlogPostRequest};
use super::repo::{BlogPost, BlogPostPatch, NewBlogPost};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(list_blog_posts))
        .route("/blogs/:id", get(get_blog_post))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", post(create_blog_post))
        .route("/blogs/:id", put(update_blog_post).delete(delete_blog_post))
}

#[instrument(skip(state, payload))]
pub async fn create_blog_post(
    State(state): State<AppState>,
    AuthUser(_email): AuthUser,
    Json(payload): Json<CreateBlogPostRequest>,
) -> Result<(StatusCode, Json<BlogPost>), ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::Validation("Blog post title is required".into()));
    }
    if payload.content.trim().is_empty() {
        return Err(ApiError::Validation(
            "Blog post content is required".into(),
        ));
    }

    let post = BlogPost::create(
        &state.db,
        NewBlogPost {
            title: payload.title.trim(),
            content: &payload.content,
            author: payload.author.as_deref(),
            image: payload.image.as_deref(),
            priority: payload.priority.as_deref(),
        },
    )
    .await?;

    info!(post_id = %post.id, "blog post created");
    Ok((StatusCode::CREATED, Json(post)))
}

#[instrument(skip(state))]
pub async fn list_blog_posts(
    State(state): State<AppState>,
    Query(filter): Query<BlogPostFilter>,
) -> Result<Json<ListResponse<BlogPost>>, ApiError> {
    let posts = BlogPost::list(&state.db, filter.priority.as_deref()).await?;
    Ok(Json(ListResponse::new(posts)))
}

#[instrument(skip(state))]
pub async fn get_blog_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogPost>, ApiError> {
    let post = BlogPost::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Blog post"))?;
    Ok(Json(post))
}

#[instrument(skip(state, payload))]
pub async fn update_blog_post(
    State(state): State<AppState>,
    AuthUser(_email): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBlogPostRequest>,
) -> Result<Json<BlogPost>, ApiError> {
    let post = BlogPost::update(
        &state.db,
        id,
        BlogPostPatch {
            title: payload.title.as_deref(),
            content: payload.content.as_deref(),
            author: payload.author.as_deref(),
            image: payload.image.as_deref(),
            priority: payload.priority.as_deref(),
        },
    )
    .await?
    .ok_or(ApiError::NotFound("Blog post"))?;

    info!(post_id = %post.id, "blog post updated");
    Ok(Json(post))
}

#[instrument(skip(state))]
pub async fn delete_blog_post(
    State(state): State<AppState>,
    AuthUser(_email): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !BlogPost::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Blog post"));
    }
    info!(post_id = %id, "blog post deleted");
    Ok(Json(MessageResponse::ok("Blog post deleted")))
}
