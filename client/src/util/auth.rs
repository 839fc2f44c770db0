//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboard routes apply identical unauthenticated redirect behavior, and
//! every view asks the same role questions before rendering an action.
//! Gating here is display-only; the API enforces the real rules.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::{Comment, Post, Role, User};
use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/auth/login";

/// Whether auth has finished loading and found nobody signed in.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to the login page whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Editors and admins write posts.
pub fn can_manage_content(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Editor | Role::Admin))
}

/// Only admins see users, categories, tags and analytics.
pub fn can_administer(role: Option<Role>) -> bool {
    role == Some(Role::Admin)
}

/// Edit/delete on a post row: admins, or the post's author.
pub fn can_modify_post(user: Option<&User>, post: &Post) -> bool {
    let Some(user) = user else {
        return false;
    };
    user.role == Role::Admin || post.author.as_ref().is_some_and(|a| a.id == user.id)
}

/// Comment delete: admins, or the comment's author.
pub fn can_delete_comment(user: Option<&User>, comment: &Comment) -> bool {
    user.is_some_and(|u| u.role == Role::Admin || comment.user.id == u.id)
}

/// Sidebar group a link is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSection {
    Main,
    Content,
    System,
}

impl NavSection {
    pub fn heading(self) -> Option<&'static str> {
        match self {
            Self::Main => None,
            Self::Content => Some("Content"),
            Self::System => Some("System"),
        }
    }
}

/// One dashboard sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub section: NavSection,
}

const OVERVIEW: NavItem = NavItem { label: "Overview", href: "/dashboard", section: NavSection::Main };
const CONTENT_NAV: [NavItem; 2] = [
    NavItem { label: "Manage Posts", href: "/dashboard/posts", section: NavSection::Content },
    NavItem { label: "Create Post", href: "/dashboard/create-post", section: NavSection::Content },
];
const ADMIN_NAV: [NavItem; 3] = [
    NavItem { label: "Users", href: "/dashboard/users", section: NavSection::System },
    NavItem { label: "Categories", href: "/dashboard/categories", section: NavSection::System },
    NavItem { label: "Tags", href: "/dashboard/tags", section: NavSection::System },
];

/// Sidebar entries visible to `role`, in display order.
pub fn nav_items(role: Option<Role>) -> Vec<NavItem> {
    let mut items = vec![OVERVIEW];
    if can_manage_content(role) {
        items.extend(CONTENT_NAV);
    }
    if can_administer(role) {
        items.extend(ADMIN_NAV);
    }
    items
}

/// Whether `href` is the active sidebar entry for `path`.
///
/// The overview only matches exactly; sections also match their sub-routes.
pub fn nav_active(href: &str, path: &str) -> bool {
    if href == OVERVIEW.href {
        return path.trim_end_matches('/') == href;
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}
