//! Networking modules for the blog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` builds and sends bearer-decorated requests, `api` names one function
//! per endpoint, and `types` defines the response/request schema.

pub mod api;
pub mod http;
pub mod types;
