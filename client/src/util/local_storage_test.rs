use super::*;

#[test]
fn quota_exception_maps_to_quota_exceeded() {
    let err = classify_set_error(Some("QuotaExceededError"), "full", "mailmage_draft", 42);
    assert_eq!(err, StorageError::QuotaExceeded { key: "mailmage_draft".to_owned(), bytes: 42 });
}

#[test]
fn security_exception_maps_to_unavailable() {
    let err = classify_set_error(Some("SecurityError"), "blocked", "k", 1);
    assert_eq!(err, StorageError::Unavailable("blocked".to_owned()));
}

#[test]
fn unknown_exception_maps_to_backend() {
    assert_eq!(classify_set_error(None, "boom", "k", 1), StorageError::Backend("boom".to_owned()));
    assert_eq!(
        classify_set_error(Some("TypeError"), "bad", "k", 1),
        StorageError::Backend("bad".to_owned())
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn storage_is_unavailable_outside_browser() {
    let storage = BrowserStorage;
    assert!(matches!(storage.get("k"), Err(StorageError::Unavailable(_))));
    assert!(matches!(storage.set("k", "v"), Err(StorageError::Unavailable(_))));
    assert!(matches!(storage.remove("k"), Err(StorageError::Unavailable(_))));
}
