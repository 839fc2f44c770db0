//! Client-side form checks run before any request is sent.
//!
//! Only the obvious mistakes are caught here: missing fields, blank names and
//! short passwords on registration. The API stays the authority on everything
//! else, including whether a login password is right.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{CategoryDraft, CommentDraft, LoginRequest, RegisterRequest, TagDraft};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,
    #[error("Enter a valid email address")]
    InvalidEmail,
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(FormError::Required(field)) } else { Ok(trimmed.to_owned()) }
}

fn email(value: &str) -> Result<String, FormError> {
    let value = required("Email", value)?;
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(value),
        _ => Err(FormError::InvalidEmail),
    }
}

fn password(value: &str) -> Result<String, FormError> {
    if value.is_empty() { Err(FormError::Required("Password")) } else { Ok(value.to_owned()) }
}

/// Length rule for new accounts only; existing credentials go to the server as typed.
fn new_password(value: &str) -> Result<String, FormError> {
    let value = password(value)?;
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(FormError::PasswordTooShort);
    }
    Ok(value)
}

/// # Errors
///
/// Returns the first failing field.
pub fn validate_login(email_raw: &str, password_raw: &str) -> Result<LoginRequest, FormError> {
    Ok(LoginRequest { email: email(email_raw)?, password: password(password_raw)? })
}

/// # Errors
///
/// Returns the first failing field.
pub fn validate_register(name: &str, email_raw: &str, password_raw: &str) -> Result<RegisterRequest, FormError> {
    Ok(RegisterRequest {
        name: required("Name", name)?,
        email: email(email_raw)?,
        password: new_password(password_raw)?,
    })
}

/// # Errors
///
/// Returns `FormError::Required` for a blank name.
pub fn validate_category(name: &str, description: &str) -> Result<CategoryDraft, FormError> {
    Ok(CategoryDraft { name: required("Category name", name)?, description: description.trim().to_owned() })
}

/// # Errors
///
/// Returns `FormError::Required` for a blank name.
pub fn validate_tag(name: &str) -> Result<TagDraft, FormError> {
    Ok(TagDraft { name: required("Tag name", name)? })
}

/// # Errors
///
/// Returns `FormError::Required` for a blank comment.
pub fn validate_comment(post_id: &str, content: &str) -> Result<CommentDraft, FormError> {
    Ok(CommentDraft { post_id: post_id.to_owned(), content: required("Comment", content)? })
}
