//! Browser `localStorage` backend for draft persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the hydrate-only web-sys glue behind the `DraftStorage` trait.
//! During SSR there is no browser storage, so every call reports
//! `Unavailable` and the draft store degrades to "no draft".

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use drafts::{DraftStorage, StorageError};

/// DOMException name browsers use for a full `localStorage`.
#[cfg(any(test, feature = "hydrate"))]
const QUOTA_EXCEEDED: &str = "QuotaExceededError";

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl DraftStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Backend(describe(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(unavailable())
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| classify_set_error(exception_name(&e).as_deref(), &describe(&e), key, value.len()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(unavailable())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Backend(describe(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(unavailable())
        }
    }
}

/// Map a failed `setItem` onto the storage error taxonomy.
#[cfg(any(test, feature = "hydrate"))]
fn classify_set_error(name: Option<&str>, detail: &str, key: &str, bytes: usize) -> StorageError {
    match name {
        Some(QUOTA_EXCEEDED) => StorageError::QuotaExceeded { key: key.to_owned(), bytes },
        Some("SecurityError") => StorageError::Unavailable(detail.to_owned()),
        _ => StorageError::Backend(detail.to_owned()),
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> StorageError {
    StorageError::Unavailable("no browser storage outside the client".to_owned())
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(describe(&e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))
}

#[cfg(feature = "hydrate")]
fn exception_name(value: &wasm_bindgen::JsValue) -> Option<String> {
    js_sys::Reflect::get(value, &wasm_bindgen::JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
}

#[cfg(feature = "hydrate")]
fn describe(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
