//! Reactive glue between the query cache and Leptos views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `QueryClient` is provided once by `App`. `use_query` wraps a fetcher in a
//! `LocalResource` that re-runs whenever the client's epoch changes; re-runs
//! for keys that are still fresh are answered from the cache without a
//! request. `run_mutation` sends a write, invalidates the affected keys only
//! after it succeeds, and raises a toast either way.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::future::Future;

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::http::ApiError;
use crate::state::query::{DEFAULT_STALE_AFTER_MS, Lookup, QueryCache, QueryKey};
use crate::state::toast::{ToastKind, ToastState};

type SharedFetch = Shared<LocalBoxFuture<'static, Result<serde_json::Value, ApiError>>>;

/// Handle to the tab-wide query cache.
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: StoredValue<QueryCache<SharedFetch>, LocalStorage>,
    epoch: RwSignal<u64>,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

enum Plan {
    Ready(serde_json::Value),
    Wait(SharedFetch),
    Start,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::with_stale_after(DEFAULT_STALE_AFTER_MS)
    }

    pub fn with_stale_after(stale_after_ms: f64) -> Self {
        Self {
            cache: StoredValue::new_local(QueryCache::with_stale_after(stale_after_ms)),
            epoch: RwSignal::new(0),
        }
    }

    /// Subscribe the current reactive scope to invalidations.
    pub fn track(&self) {
        self.epoch.track();
    }

    /// Read `key` through the cache, running `fetcher` only when no fresh
    /// value exists and no identical request is already in flight.
    ///
    /// The shared request stores its own result, so the cache is filled by
    /// whichever reader drives it to completion, even when the reader that
    /// started it has been dropped.
    ///
    /// # Errors
    ///
    /// Returns the fetcher's error, or `ApiError::Decode` if a cached value no
    /// longer matches `T`.
    pub async fn fetch<T, F, Fut>(self, key: QueryKey, fetcher: F) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let now = now_ms();
        let plan = self
            .cache
            .try_with_value(|cache| match cache.lookup(&key, now) {
                Lookup::Fresh(value) => Plan::Ready(value.clone()),
                Lookup::Pending(shared) => Plan::Wait(shared.clone()),
                Lookup::Miss => Plan::Start,
            })
            .ok_or(ApiError::Unavailable)?;

        let value = match plan {
            Plan::Ready(value) => value,
            Plan::Wait(shared) => shared.await?,
            Plan::Start => {
                let request = fetcher();
                let store = self.cache;
                let shared = store
                    .try_update_value(|cache| {
                        let generation = cache.generation(&key);
                        let settle_key = key.clone();
                        let shared: SharedFetch = async move {
                            let result = match request.await {
                                Ok(data) => serde_json::to_value(data).map_err(|e| ApiError::Decode(e.to_string())),
                                Err(e) => Err(e),
                            };
                            let _ = store.try_update_value(|cache| match &result {
                                Ok(value) => {
                                    cache.complete(&settle_key, generation, value.clone(), now_ms());
                                }
                                Err(_) => cache.abandon(&settle_key, generation),
                            });
                            result
                        }
                        .boxed_local()
                        .shared();
                        cache.begin(key.clone(), shared.clone());
                        shared
                    })
                    .ok_or(ApiError::Unavailable)?;
                shared.await?
            }
        };
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Mark `prefix` stale and wake every mounted query.
    pub fn invalidate(&self, prefix: &QueryKey) {
        let _ = self.cache.try_update_value(|cache| cache.invalidate(prefix));
        self.epoch.update(|epoch| *epoch += 1);
    }
}

/// Declare a cached read for the current component.
///
/// `key` is reactive: reading signals inside it re-keys the query.
pub fn use_query<T, K, F, Fut>(key: K, fetcher: F) -> LocalResource<Result<T, ApiError>>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
    K: Fn() -> QueryKey + 'static,
    F: Fn(QueryKey) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let client = expect_context::<QueryClient>();
    LocalResource::new(move || {
        client.track();
        let key = key();
        let fetcher = fetcher.clone();
        async move {
            let request_key = key.clone();
            client.fetch(key, move || fetcher(request_key)).await
        }
    })
}

/// What a write invalidates and how it is announced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mutation {
    pub invalidate: Vec<QueryKey>,
    /// Success toast text; `None` leaves the announcement to `on_success`.
    pub success: Option<String>,
    /// Error toast text when the server gives no message.
    pub failure: &'static str,
}

impl Mutation {
    pub fn new(failure: &'static str) -> Self {
        Self { invalidate: Vec::new(), success: None, failure }
    }

    #[must_use]
    pub fn invalidates(mut self, key: QueryKey) -> Self {
        self.invalidate.push(key);
        self
    }

    #[must_use]
    pub fn success(mut self, message: impl Into<String>) -> Self {
        self.success = Some(message.into());
        self
    }

    /// Keys to invalidate and the toast to raise for a settled request.
    ///
    /// Nothing is invalidated on failure.
    pub fn settle<T>(&self, result: &Result<T, ApiError>) -> (Vec<QueryKey>, Option<(ToastKind, String)>) {
        match result {
            Ok(_) => (self.invalidate.clone(), self.success.clone().map(|m| (ToastKind::Success, m))),
            Err(e) => (Vec::new(), Some((ToastKind::Error, e.user_message(self.failure)))),
        }
    }
}

/// Send a write in the background. On success the mutation's keys are
/// invalidated before `on_success` runs.
pub fn run_mutation<T, Fut, S>(mutation: Mutation, request: Fut, on_success: S)
where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    S: FnOnce(T) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let client = expect_context::<QueryClient>();
        let toasts = expect_context::<RwSignal<ToastState>>();
        leptos::task::spawn_local(async move {
            let result = request.await;
            let (keys, toast) = mutation.settle(&result);
            for key in &keys {
                client.invalidate(key);
            }
            if let Some((kind, message)) = toast {
                notify(toasts, kind, message);
            }
            if let Ok(value) = result {
                on_success(value);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (mutation, request, on_success);
    }
}

/// Raise a toast and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, message));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::toast::TOAST_DURATION_MS)).await;
            let _ = toasts.try_update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1_000.0)
    }
}
