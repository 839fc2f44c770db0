//! Client-side state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` holds the signed-in session, `query` the response cache, `toast`
//! the notification queue, and `likes` the per-post like view model. Each is
//! plain data; reactivity comes from the signals `app` wraps them in.

pub mod auth;
pub mod likes;
pub mod query;
pub mod toast;
