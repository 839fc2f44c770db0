//! REST endpoint helpers, one per server route the client uses.
//!
//! Client-side (hydrate): real HTTP calls through `net::http`.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable`; pages
//! only fetch from the browser after hydration.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{ApiError, ApiRequest, MultipartForm};
use super::types::{
    Analytics, ApiMessage, AuthResponse, Category, CategoryDraft, Comment, CommentDraft, LikeRequest, LikeSummary,
    LikeToggleResponse, LoginRequest, Post, PostsPage, RegisterRequest, Tag, TagDraft, User,
};

fn posts_endpoint(page: u32) -> String {
    if page <= 1 { "/posts".to_owned() } else { format!("/posts?page={page}") }
}

fn post_endpoint(id: &str) -> String {
    format!("/posts/{id}")
}

fn comments_endpoint(post_id: &str) -> String {
    format!("/comments/{post_id}")
}

fn comment_endpoint(comment_id: &str) -> String {
    format!("/comments/{comment_id}")
}

fn likes_endpoint(post_id: &str) -> String {
    format!("/likes/{post_id}")
}

/// `POST /auth/login`.
///
/// # Errors
///
/// Returns the server's rejection (e.g. bad credentials) as `ApiError::Status`.
pub async fn login(body: &LoginRequest) -> Result<AuthResponse, ApiError> {
    ApiRequest::post("/auth/login").json(body)?.send().await
}

/// `POST /auth/register`.
///
/// # Errors
///
/// Returns the server's rejection (e.g. duplicate email) as `ApiError::Status`.
pub async fn register(body: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    ApiRequest::post("/auth/register").json(body)?.send().await
}

/// `GET /auth/users` (admin only on the server).
///
/// # Errors
///
/// Propagates any request failure.
pub async fn list_users() -> Result<Vec<User>, ApiError> {
    ApiRequest::get("/auth/users").send().await
}

/// `GET /posts`, one page of the paginated feed.
///
/// # Errors
///
/// Propagates any request failure.
pub async fn list_posts(page: u32) -> Result<PostsPage, ApiError> {
    ApiRequest::get(posts_endpoint(page)).send().await
}

/// `GET /posts/:id`.
///
/// # Errors
///
/// Returns `ApiError::Status` with 404 when the post does not exist.
pub async fn get_post(id: &str) -> Result<Post, ApiError> {
    ApiRequest::get(post_endpoint(id)).send().await
}

/// `POST /posts` as multipart form data.
///
/// # Errors
///
/// Propagates any request failure.
pub async fn create_post(form: MultipartForm) -> Result<ApiMessage, ApiError> {
    ApiRequest::post("/posts").multipart(form).send_ack().await
}

/// `PUT /posts/:id` as multipart form data.
///
/// # Errors
///
/// Propagates any request failure.
pub async fn update_post(id: &str, form: MultipartForm) -> Result<ApiMessage, ApiError> {
    ApiRequest::put(post_endpoint(id)).multipart(form).send_ack().await
}

/// `DELETE /posts/:id`.
///
/// # Errors
///
/// Propagates any request failure.
pub async fn delete_post(id: &str) -> Result<ApiMessage, ApiError> {
    ApiRequest::delete(post_endpoint(id)).send_ack().await
}

/// `GET /categories`.
///
/// # Errors
///
/// Propagates any request failure.
pub async fn list_categories() -> Result<Vec<Category>, ApiError> {
    ApiRequest::get("/categories").send().await
}

/// `POST /categories`.
///
/// # Errors
///
/// Propagates any request failure.
pub async fn create_category(body: &CategoryDraft) -> Result<ApiMessage, ApiError> {
    ApiRequest::post("/categories").json(body)?.send_ack().await
}

/// `GET /tags`.
///
/// # Errors
///
/// Propagates any request failure.
pub async fn list_tags() -> Result<Vec<Tag>, ApiError> {
    ApiRequest::get("/tags").send().await
}

/// `POST /tags`.
///
/// # Errors
///
/// Propagates any request failure.
pub async fn create_tag(body: &TagDraft) -> Result<ApiMessage, ApiError> {
    ApiRequest::post("/tags").json(body)?.send_ack().await
}

/// `GET /comments/:postId`.
///
/// # Errors
///
/// Propagates any request failure.
pub async fn list_comments(post_id: &str) -> Result<Vec<Comment>, ApiError> {
    ApiRequest::get(comments_endpoint(post_id)).send().await
}

/// `POST /comments`.
///
/// # Errors
///
/// Propagates any request failure.
pub async fn add_comment(body: &CommentDraft) -> Result<ApiMessage, ApiError> {
    ApiRequest::post("/comments").json(body)?.send_ack().await
}

/// `DELETE /comments/:id`.
///
/// # Errors
///
/// Propagates any request failure.
pub async fn delete_comment(comment_id: &str) -> Result<ApiMessage, ApiError> {
    ApiRequest::delete(comment_endpoint(comment_id)).send_ack().await
}

/// `GET /likes/:postId`.
///
/// # Errors
///
/// Propagates any request failure.
pub async fn like_summary(post_id: &str) -> Result<LikeSummary, ApiError> {
    ApiRequest::get(likes_endpoint(post_id)).send().await
}

/// `POST /likes`, toggling the caller's like on a post.
///
/// # Errors
///
/// Propagates any request failure (401 when signed out).
pub async fn toggle_like(post_id: &str) -> Result<LikeToggleResponse, ApiError> {
    let body = LikeRequest { post_id: post_id.to_owned() };
    ApiRequest::post("/likes").json(&body)?.send().await
}

/// `GET /analytics` (admin only on the server).
///
/// # Errors
///
/// Propagates any request failure.
pub async fn analytics() -> Result<Analytics, ApiError> {
    ApiRequest::get("/analytics").send().await
}
