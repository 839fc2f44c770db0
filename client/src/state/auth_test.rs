use super::*;

fn ada() -> User {
    User {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role: Role::Editor,
        created_at: None,
    }
}

#[test]
fn default_state_is_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_signed_in());
    assert_eq!(state.role(), None);
}

#[test]
fn login_persists_token_and_user() {
    let store = MemoryStore::default();
    let mut state = AuthState::default();
    state.login(&store, "jwt-1".to_owned(), ada());

    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("jwt-1"));
    assert!(store.get(USER_KEY).unwrap().contains("\"_id\":\"u1\""));
    assert_eq!(state.token.as_deref(), Some("jwt-1"));
    assert_eq!(state.role(), Some(Role::Editor));
    assert!(!state.loading);
}

#[test]
fn restore_reads_what_login_wrote() {
    let store = MemoryStore::default();
    AuthState::default().login(&store, "jwt-1".to_owned(), ada());

    let restored = AuthState::restore(&store);
    assert_eq!(restored.user, Some(ada()));
    assert_eq!(restored.token.as_deref(), Some("jwt-1"));
    assert!(!restored.loading);
}

#[test]
fn restore_from_empty_store_is_signed_out_and_not_loading() {
    let restored = AuthState::restore(&MemoryStore::default());
    assert_eq!(restored, AuthState { user: None, token: None, loading: false });
}

#[test]
fn restore_discards_corrupt_user_and_orphan_token() {
    let store = MemoryStore::default();
    store.set(TOKEN_KEY, "jwt-1");
    store.set(USER_KEY, "{not json");

    let restored = AuthState::restore(&store);
    assert!(!restored.is_signed_in());
    assert_eq!(restored.token, None);
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
}

#[test]
fn logout_clears_storage_and_memory() {
    let store = MemoryStore::default();
    let mut state = AuthState::default();
    state.login(&store, "jwt-1".to_owned(), ada());
    state.logout(&store);

    assert_eq!(state, AuthState { user: None, token: None, loading: false });
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
}

#[test]
fn local_storage_store_is_inert_off_browser() {
    let store = LocalStorageStore;
    store.set(TOKEN_KEY, "x");
    assert_eq!(store.get(TOKEN_KEY), None);
}
