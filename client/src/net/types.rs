//! Response and request schemas for the blog REST API.
//!
//! DESIGN
//! ======
//! The server emits Mongo-style documents (`_id`, camelCase timestamps) and
//! sometimes populates references while other times sending bare ids. These
//! types pin that shape down at the boundary so views never touch raw JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Message the like endpoint returns when a toggle results in a like.
pub const LIKED_MESSAGE: &str = "Post liked";

/// Account role. Drives which dashboard sections are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Editor,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Editor => "editor",
            Self::Admin => "admin",
        }
    }

    /// Capitalized label for badges and stat cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Editor => "Editor",
            Self::Admin => "Admin",
        }
    }
}

/// Publication state of a post.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }

    /// Parse a `<select>` value; anything unrecognised falls back to draft.
    pub fn from_form_value(raw: &str) -> Self {
        match raw {
            "published" => Self::Published,
            _ => Self::Draft,
        }
    }
}

/// An account as listed by `/auth/users` and persisted after login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server document id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Role used for display gating.
    #[serde(default)]
    pub role: Role,
    /// ISO 8601 creation timestamp.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body returned by `/auth/login` and `/auth/register`: the user plus a token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: User,
    pub token: String,
}

/// A reference to another document that may arrive populated or as a bare id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEntityRef")]
pub struct EntityRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntityRef {
    Id(String),
    Populated {
        #[serde(rename = "_id")]
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<RawEntityRef> for EntityRef {
    fn from(raw: RawEntityRef) -> Self {
        match raw {
            RawEntityRef::Id(id) => Self { id, name: None },
            RawEntityRef::Populated { id, name } => Self { id, name },
        }
    }
}

impl EntityRef {
    /// Display name, or `fallback` when the reference was not populated.
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }
}

/// A blog post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Server-relative or absolute image path.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub category: Option<EntityRef>,
    #[serde(default)]
    pub author: Option<EntityRef>,
    #[serde(default)]
    pub tags: Vec<EntityRef>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Paginated envelope returned by `GET /posts`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostsPage {
    pub posts: Vec<Post>,
    #[serde(default = "first_page", deserialize_with = "deserialize_u32_from_number")]
    pub page: u32,
    #[serde(default = "first_page", deserialize_with = "deserialize_u32_from_number")]
    pub pages: u32,
}

fn first_page() -> u32 {
    1
}

impl PostsPage {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

/// A post category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A post tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A comment on a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    /// Comment author.
    pub user: EntityRef,
    #[serde(default)]
    pub post: Option<EntityRef>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Aggregate like count for a post (`GET /likes/:postId`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeSummary {
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub count: u64,
    /// Whether the caller has liked the post, when the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liked: Option<bool>,
}

/// Response to `POST /likes`, which toggles the caller's like.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeToggleResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub liked: Option<bool>,
}

impl LikeToggleResponse {
    /// Prefer the structured flag; older servers only send a message string.
    pub fn is_liked(&self) -> bool {
        self.liked.unwrap_or(self.message == LIKED_MESSAGE)
    }
}

/// Admin dashboard counters from `GET /analytics`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    #[serde(rename = "totalPosts", default, deserialize_with = "deserialize_u64_from_number")]
    pub total_posts: u64,
    #[serde(rename = "totalUsers", default, deserialize_with = "deserialize_u64_from_number")]
    pub total_users: u64,
    #[serde(rename = "totalLikes", default, deserialize_with = "deserialize_u64_from_number")]
    pub total_likes: u64,
}

/// Generic `{ "message": ... }` body used by mutations and error responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TagDraft {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CommentDraft {
    #[serde(rename = "postId")]
    pub post_id: String,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LikeRequest {
    #[serde(rename = "postId")]
    pub post_id: String,
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_u64_from_number(deserializer)?;
    u32::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for u32")))
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}
