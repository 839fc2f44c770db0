//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod dashboard;
pub mod dashboard_categories;
pub mod dashboard_posts;
pub mod dashboard_tags;
pub mod dashboard_users;
pub mod home;
pub mod login;
pub mod post;
pub mod post_editor;
pub mod register;
