use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_set_get_remove() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get_item(AUTH_TOKEN_KEY).unwrap(), None);

    storage.set_item(AUTH_TOKEN_KEY, "abc").unwrap();
    assert_eq!(storage.get_item(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("abc"));

    storage.remove_item(AUTH_TOKEN_KEY).unwrap();
    assert_eq!(storage.get_item(AUTH_TOKEN_KEY).unwrap(), None);
}

#[test]
fn memory_remove_missing_is_ok() {
    let storage = MemoryStorage::new();
    assert!(storage.remove_item("nope").is_ok());
}

#[test]
fn memory_with_item_is_preseeded() {
    let storage = MemoryStorage::with_item(AUTH_TOKEN_KEY, "persisted");
    assert_eq!(storage.get_item(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("persisted"));
}

// =============================================================
// FileStorage
// =============================================================

#[test]
fn file_missing_dir_reads_as_none() {
    let tmp = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(tmp.path().join("not-yet"));
    assert_eq!(storage.get_item(AUTH_TOKEN_KEY).unwrap(), None);
    assert!(storage.remove_item(AUTH_TOKEN_KEY).is_ok());
}

#[test]
fn file_set_creates_dir_and_persists_raw_value() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("session");
    let storage = FileStorage::new(&dir);

    storage.set_item(AUTH_TOKEN_KEY, "abc").unwrap();
    assert_eq!(std::fs::read_to_string(dir.join(AUTH_TOKEN_KEY)).unwrap(), "abc");

    let reopened = FileStorage::new(&dir);
    assert_eq!(reopened.get_item(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("abc"));
}

#[test]
fn file_remove_deletes_file() {
    let tmp = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(tmp.path());
    storage.set_item(AUTH_TOKEN_KEY, "abc").unwrap();
    storage.remove_item(AUTH_TOKEN_KEY).unwrap();
    assert!(!tmp.path().join(AUTH_TOKEN_KEY).exists());
    assert_eq!(storage.get_item(AUTH_TOKEN_KEY).unwrap(), None);
}

#[test]
fn file_hand_edited_value_drops_trailing_newline() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join(AUTH_TOKEN_KEY), "abc\n").unwrap();
    let storage = FileStorage::new(tmp.path());
    assert_eq!(storage.get_item(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("abc"));
}

#[test]
fn file_blank_value_reads_as_none() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join(AUTH_TOKEN_KEY), " \r\n").unwrap();
    let storage = FileStorage::new(tmp.path());
    assert_eq!(storage.get_item(AUTH_TOKEN_KEY).unwrap(), None);
}
