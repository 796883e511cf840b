use super::*;
use crate::state::storage::{MemoryStorage, StorageError};

fn ferris() -> User {
    User {
        id: 7,
        email: "ferris@example.com".into(),
        display_name: Some("Ferris".into()),
        is_active: true,
        is_superuser: false,
    }
}

fn stored_token<S: TokenStorage>(store: &SessionStore<S>) -> Option<String> {
    store.storage().get_item(AUTH_TOKEN_KEY).unwrap()
}

/// Storage whose every operation fails.
struct BrokenStorage;

impl TokenStorage for BrokenStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disabled".into()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled".into()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled".into()))
    }
}

// =============================================================
// load
// =============================================================

#[test]
fn load_empty_storage_is_signed_out() {
    let store = SessionStore::load(MemoryStorage::new());
    assert_eq!(store.token(), "");
    assert_eq!(store.user(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn load_restores_token_but_not_user() {
    let store = SessionStore::load(MemoryStorage::with_item(AUTH_TOKEN_KEY, "persisted"));
    assert_eq!(store.token(), "persisted");
    assert!(store.is_authenticated());
    assert_eq!(store.user(), None);
}

#[test]
fn load_unreadable_storage_is_signed_out() {
    let store = SessionStore::load(BrokenStorage);
    assert!(!store.is_authenticated());
}

// =============================================================
// set_session / sign_out
// =============================================================

#[test]
fn set_session_persists_token() {
    let store = SessionStore::load(MemoryStorage::new());
    store.set_session(Session::new("abc", Some(ferris())));

    assert!(store.is_authenticated());
    assert_eq!(store.token(), "abc");
    assert_eq!(store.user(), Some(ferris()));
    assert_eq!(stored_token(&store).as_deref(), Some("abc"));
}

#[test]
fn set_session_empty_token_clears_storage() {
    let store = SessionStore::load(MemoryStorage::with_item(AUTH_TOKEN_KEY, "old"));
    store.set_session(Session::new("", None));

    assert!(!store.is_authenticated());
    assert_eq!(stored_token(&store), None);
}

#[test]
fn sign_out_matches_empty_set_session() {
    let via_sign_out = SessionStore::load(MemoryStorage::new());
    via_sign_out.set_session(Session::new("abc", Some(ferris())));
    via_sign_out.sign_out();

    let via_set = SessionStore::load(MemoryStorage::new());
    via_set.set_session(Session::new("abc", Some(ferris())));
    via_set.set_session(Session::new("", None));

    assert_eq!(via_sign_out.session(), via_set.session());
    assert_eq!(via_sign_out.session(), Session::default());
    assert_eq!(stored_token(&via_sign_out), None);
    assert_eq!(stored_token(&via_set), None);
}

#[test]
fn set_session_replaces_previous_token() {
    let store = SessionStore::load(MemoryStorage::new());
    store.set_session(Session::new("first", Some(ferris())));
    store.set_session(Session::new("second", Some(ferris())));
    assert_eq!(store.token(), "second");
    assert_eq!(stored_token(&store).as_deref(), Some("second"));
}

#[test]
fn set_session_survives_storage_failure() {
    let store = SessionStore::load(BrokenStorage);
    store.set_session(Session::new("abc", Some(ferris())));
    assert!(store.is_authenticated());
    store.sign_out();
    assert!(!store.is_authenticated());
}

#[test]
fn token_survives_reload_through_file_storage() {
    let tmp = tempfile::tempdir().unwrap();
    let first = SessionStore::load(crate::state::storage::FileStorage::new(tmp.path()));
    first.set_session(Session::new("abc", Some(ferris())));
    drop(first);

    let second = SessionStore::load(crate::state::storage::FileStorage::new(tmp.path()));
    assert_eq!(second.token(), "abc");
    assert_eq!(second.user(), None);
}

#[test]
fn load_hand_edited_token_file_sends_clean_token() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join(AUTH_TOKEN_KEY), "abc\n").unwrap();

    let store = SessionStore::load(crate::state::storage::FileStorage::new(tmp.path()));
    assert_eq!(store.token(), "abc");
}

// =============================================================
// subscribe
// =============================================================

#[tokio::test]
async fn subscribers_observe_changes() {
    let store = SessionStore::load(MemoryStorage::new());
    let mut rx = store.subscribe();
    assert!(!rx.borrow().is_authenticated());

    store.set_session(Session::new("abc", Some(ferris())));
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().token, "abc");

    store.sign_out();
    rx.changed().await.unwrap();
    assert!(!rx.borrow_and_update().is_authenticated());
}
