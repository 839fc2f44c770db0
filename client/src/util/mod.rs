//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod config;
pub mod format;
pub mod forms;
pub mod post_form;
pub mod query;
pub mod upload;
