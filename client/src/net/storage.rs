//! `localStorage`-backed session slot.
//!
//! Outside the browser (`ssr`, tests) every operation is a no-op, so the
//! server render always sees an anonymous provider.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use links::SessionStorage;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
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

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                tracing::warn!("localStorage unavailable; session not persisted");
                return;
            };
            if storage.set_item(key, value).is_err() {
                tracing::warn!(key, "localStorage write failed");
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
