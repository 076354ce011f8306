//! Persistent storage for the bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the session provider touches these stores. Pages and components ask
//! the provider for authorized calls instead of reading the token.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use std::cell::RefCell;
use std::rc::Rc;

/// A single opaque credential slot that survives page reloads.
pub trait CredentialStore {
    fn load(&self) -> Option<String>;
    fn save(&self, credential: &str);
    fn clear(&self);
}

/// Browser `localStorage` slot keyed by a fixed name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageCredentials {
    key: String,
}

impl LocalStorageCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl CredentialStore for LocalStorageCredentials {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(&self.key).ok().flatten().filter(|raw| !raw.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, credential: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; credential not persisted");
                return;
            };
            if storage.set_item(&self.key, credential).is_err() {
                log::warn!("failed to persist credential under {}", self.key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credential;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}

/// In-process slot. Clones share the same slot, so a test can hand one copy
/// to the provider and inspect another.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentials {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryCredentials {
    pub fn with_credential(credential: &str) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(credential.to_owned()))) }
    }
}

impl CredentialStore for MemoryCredentials {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, credential: &str) {
        *self.slot.borrow_mut() = Some(credential.to_owned());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
