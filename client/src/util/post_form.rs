//! Field state behind the create/edit post form.
//!
//! DESIGN
//! ======
//! The editor keeps plain strings for every control and only turns them into
//! a multipart body on submit. An empty category select means uncategorized:
//! a new post simply omits the field, while an edit sends it empty so the
//! server can clear a previous category.

#[cfg(test)]
#[path = "post_form_test.rs"]
mod post_form_test;

use super::forms::FormError;
use crate::net::http::MultipartForm;
use crate::net::types::{Post, PostStatus};
use crate::util::upload::ImageUpload;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    /// Selected category id; empty for none.
    pub category: String,
}

impl PostDraft {
    /// Prefill from an existing post.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            status: post.status,
            category: post.category.as_ref().map(|c| c.id.clone()).unwrap_or_default(),
        }
    }

    /// # Errors
    ///
    /// Returns `FormError::Required` for a blank title or body.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::Required("Title"));
        }
        if self.content.trim().is_empty() {
            return Err(FormError::Required("Content"));
        }
        Ok(())
    }

    /// Build the multipart body for `mode`.
    pub fn to_form(&self, mode: EditorMode, image: Option<ImageUpload>) -> MultipartForm {
        let mut form = MultipartForm::default()
            .field("title", self.title.trim())
            .field("content", self.content.clone())
            .field("status", self.status.as_str());
        if mode == EditorMode::Edit || !self.category.is_empty() {
            form = form.field("category", self.category.clone());
        }
        form.image = image;
        form
    }
}
