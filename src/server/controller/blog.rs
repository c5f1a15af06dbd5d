use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        blog::{BlogPostDto, BlogPostInputDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::blog::{BlogPost, BlogPostParams},
        service::blog::BlogService,
        state::AppState,
    },
};

/// Tag for grouping blog endpoints in OpenAPI documentation
pub static BLOG_TAG: &str = "blog";

/// Whether the session belongs to an admin, who also sees drafts.
async fn is_admin(state: &AppState, session: &Session) -> bool {
    AuthGuard::new(&state.store, session)
        .require(&[Permission::Admin])
        .await
        .is_ok()
}

/// List blog posts, newest first.
///
/// Anonymous visitors only see published posts. Admins see drafts as well.
///
/// # Returns
/// - `200 OK` - Blog posts
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = BLOG_TAG,
    responses(
        (status = 200, description = "Blog posts", body = Vec<BlogPostDto>)
    ),
)]
pub async fn get_posts(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let include_drafts = is_admin(&state, &session).await;
    let posts = BlogService::new(&state.store).list(include_drafts).await;

    Json(posts.into_iter().map(BlogPost::into_dto).collect::<Vec<_>>())
}

/// Get a post by slug.
///
/// # Returns
/// - `200 OK` - The post
/// - `404 Not Found` - No such post, or a draft requested by a non-admin
#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = BLOG_TAG,
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 200, description = "Blog post", body = BlogPostDto),
        (status = 404, description = "Blog post not found", body = ErrorDto)
    ),
)]
pub async fn get_post_by_slug(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let include_drafts = is_admin(&state, &session).await;
    let post = BlogService::new(&state.store)
        .get_by_slug(&slug, include_drafts)
        .await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Create a post.
///
/// Publishing a post without a publish date stamps it with the current time.
///
/// # Access Control
/// - `Admin` - Only admins can write posts
///
/// # Returns
/// - `201 Created` - The stored post
/// - `400 Bad Request` - Blank title or author
/// - `409 Conflict` - Slug already used by another post
#[utoipa::path(
    post,
    path = "/api/blog",
    tag = BLOG_TAG,
    request_body = BlogPostInputDto,
    responses(
        (status = 201, description = "Created blog post", body = BlogPostDto),
        (status = 400, description = "Invalid blog post data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BlogPostInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    let post = BlogService::new(&state.store)
        .create(BlogPostParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/blog/id/{id}",
    tag = BLOG_TAG,
    params(
        ("id" = i32, Path, description = "Post id")
    ),
    request_body = BlogPostInputDto,
    responses(
        (status = 200, description = "Updated blog post", body = BlogPostDto),
        (status = 400, description = "Invalid blog post data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Blog post not found", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<BlogPostInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    let post = BlogService::new(&state.store)
        .update(id, BlogPostParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/blog/id/{id}",
    tag = BLOG_TAG,
    params(
        ("id" = i32, Path, description = "Post id")
    ),
    responses(
        (status = 204, description = "Blog post deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Blog post not found", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    BlogService::new(&state.store).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
