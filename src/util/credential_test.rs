use super::*;

#[test]
fn memory_credentials_start_empty() {
    assert_eq!(MemoryCredentials::default().load(), None);
}

#[test]
fn memory_credentials_save_then_clear() {
    let store = MemoryCredentials::default();
    store.save("tok-1");
    assert_eq!(store.load().as_deref(), Some("tok-1"));
    store.save("tok-2");
    assert_eq!(store.load().as_deref(), Some("tok-2"));
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_credentials_clones_share_slot() {
    let store = MemoryCredentials::with_credential("tok");
    let view = store.clone();
    store.clear();
    assert_eq!(view.load(), None);
}

#[test]
fn local_storage_credentials_keep_key() {
    let store = LocalStorageCredentials::new("coursehub_token");
    assert_eq!(store.key(), "coursehub_token");
}

#[test]
fn local_storage_credentials_empty_outside_browser() {
    let store = LocalStorageCredentials::new("coursehub_token");
    store.save("tok");
    assert_eq!(store.load(), None);
}
