//! Bearer token kept in the browser's local storage.

use portal::session::{SessionStore, TOKEN_KEY};
use web_sys::Storage;

pub struct LocalStore;

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for LocalStore {
    fn token(&self) -> Option<String> {
        storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn set_token(&self, token: &str) {
        let Some(storage) = storage() else {
            tracing::warn!("local storage unavailable, token not saved");
            return;
        };
        if let Err(e) = storage.set_item(TOKEN_KEY, token) {
            tracing::error!(?e, "failed to save token");
        }
    }

    fn clear(&self) {
        if let Some(storage) = storage() {
            if let Err(e) = storage.remove_item(TOKEN_KEY) {
                tracing::error!(?e, "failed to clear token");
            }
        }
    }
}
