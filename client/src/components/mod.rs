//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render feed and dashboard chrome while reading/writing shared
//! state from Leptos context providers.

pub mod comments_section;
pub mod dashboard_shell;
pub mod like_button;
pub mod post_card;
pub mod site_header;
pub mod skeletons;
pub mod toast_host;
