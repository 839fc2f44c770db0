//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, the HTTP wrapper, and user-aware components. The
//! token and user survive reloads through a `SessionStore`; in the browser
//! that is `localStorage`, on the server and in tests it is memory.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::net::types::{Role, User};

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-encoded signed-in user.
pub const USER_KEY: &str = "user";

/// Key/value persistence for the session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Reads return `None` and writes no-op outside the
/// browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Current user, bearer token, and whether persisted state is still being read.
///
/// `loading` starts `true` so guards wait for the first client-side restore
/// before deciding to redirect.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, token: None, loading: true }
    }
}

impl AuthState {
    /// Rebuild state from persisted storage.
    ///
    /// A token without a readable user (or the reverse) is treated as signed
    /// out and the leftovers are cleared.
    pub fn restore(store: &impl SessionStore) -> Self {
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = store
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok());

        match (token, user) {
            (Some(token), Some(user)) => Self { user: Some(user), token: Some(token), loading: false },
            (None, None) => Self { user: None, token: None, loading: false },
            _ => {
                store.remove(TOKEN_KEY);
                store.remove(USER_KEY);
                Self { user: None, token: None, loading: false }
            }
        }
    }

    /// Persist a fresh session and make it current.
    pub fn login(&mut self, store: &impl SessionStore, token: String, user: User) {
        store.set(TOKEN_KEY, &token);
        if let Ok(raw) = serde_json::to_string(&user) {
            store.set(USER_KEY, &raw);
        }
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
    }

    /// Forget the session in storage and memory.
    pub fn logout(&mut self, store: &impl SessionStore) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
