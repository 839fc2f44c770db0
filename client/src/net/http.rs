//! Bearer-decorated HTTP requests against the blog API.
//!
//! Every call goes through `ApiRequest::send`, which reads the session token
//! from `localStorage` immediately before sending and attaches
//! `Authorization: Bearer <token>` when one exists.
//!
//! ERROR HANDLING
//! ==============
//! No retries, timeouts, or backoff. Failures come back as `ApiError` and the
//! caller decides how to surface them (normally a toast carrying the server's
//! `message`).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::ApiMessage;
use crate::util::config::api_url;
use crate::util::upload::ImageUpload;

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message to show the user: the server's own text when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Text fields plus an optional image, sent as `multipart/form-data`.
#[derive(Clone, Debug, Default)]
pub struct MultipartForm {
    pub fields: Vec<(&'static str, String)>,
    pub image: Option<ImageUpload>,
}

impl MultipartForm {
    pub fn field(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    #[cfg(feature = "hydrate")]
    fn to_form_data(&self) -> Result<web_sys::FormData, ApiError> {
        let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
        let data = web_sys::FormData::new().map_err(js_err)?;
        for (name, value) in &self.fields {
            data.append_with_str(name, value).map_err(js_err)?;
        }
        if let Some(image) = &self.image {
            data.append_with_blob_and_filename("image", &image.file, &image.name)
                .map_err(js_err)?;
        }
        Ok(data)
    }
}

#[derive(Clone, Debug, Default)]
pub enum Body {
    #[default]
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

/// One request against the API, relative to `<base>/api`.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Body,
}

/// Header value for a stored token, if any.
pub fn authorization_header(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {t}"))
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: Body::Empty }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if `body` cannot be encoded as JSON.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Body::Json(value);
        Ok(self)
    }

    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = Body::Multipart(form);
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn url(&self) -> String {
        api_url(&self.path)
    }

    /// Send the request with the stored token and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` for non-2xx responses (carrying the server's
    /// `message` when present), `ApiError::Network` when the request never
    /// completed, and `ApiError::Decode` when the body does not match `T`.
    pub async fn send<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::auth::{LocalStorageStore, SessionStore, TOKEN_KEY};

            let net_err = |e: gloo_net::Error| ApiError::Network(e.to_string());
            let url = self.url();
            let mut builder = match self.method {
                Method::Get => gloo_net::http::Request::get(&url),
                Method::Post => gloo_net::http::Request::post(&url),
                Method::Put => gloo_net::http::Request::put(&url),
                Method::Delete => gloo_net::http::Request::delete(&url),
            };
            let token = LocalStorageStore.get(TOKEN_KEY);
            if let Some(value) = authorization_header(token.as_deref()) {
                builder = builder.header("Authorization", &value);
            }
            // Multipart lets the browser write the boundary into Content-Type.
            let request = match &self.body {
                Body::Empty => builder.build(),
                Body::Json(value) => builder.json(value),
                Body::Multipart(form) => builder.body(form.to_form_data()?),
            }
            .map_err(net_err)?;

            let resp = request.send().await.map_err(net_err)?;
            if !resp.ok() {
                let status = resp.status();
                let message = resp.json::<ApiMessage>().await.ok().and_then(|m| m.message);
                log::warn!("{} {} -> {status}", self.method.as_str(), self.path);
                return Err(ApiError::Status { status, message });
            }
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self;
            Err(ApiError::Unavailable)
        }
    }

    /// Send a mutation whose response is only a `{ message }` acknowledgement.
    ///
    /// # Errors
    ///
    /// Same as [`ApiRequest::send`].
    pub async fn send_ack(self) -> Result<ApiMessage, ApiError> {
        self.send::<ApiMessage>().await
    }
}
