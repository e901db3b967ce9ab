//! Browser Session Storage
//!
//! The login flow (outside this app) leaves the bearer token in
//! `localStorage["token"]`.

use taskboard_core::CredentialStore;

const TOKEN_KEY: &str = "token";

/// `localStorage`-backed credential store
pub struct BrowserCredentials;

impl BrowserCredentials {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CredentialStore for BrowserCredentials {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(TOKEN_KEY) {
                log::warn!("failed to clear stored token: {e:?}");
            }
        }
    }
}

/// Hand over to the external login page
pub fn redirect_to_login(login_path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(login_path) {
        log::error!("redirect to {login_path} failed: {e:?}");
    }
}

/// Drop the credential and leave the board
pub fn logout(login_path: &str) {
    BrowserCredentials.clear();
    redirect_to_login(login_path);
}
