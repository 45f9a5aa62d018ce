//! Access token kept by the login flow in `localStorage`.

use analytics::BearerToken;
use web_sys::{window, Storage};

pub const ACCESS_TOKEN_KEY: &str = "access_token";

fn storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Stored bearer token, `None` when absent or blank.
pub fn access_token() -> Option<BearerToken> {
    let token = storage()?.get_item(ACCESS_TOKEN_KEY).ok().flatten()?;
    BearerToken::new(token)
}

/// Drops the stored token after the backend rejected it.
pub fn clear_access_token() {
    if let Some(storage) = storage() {
        if let Err(e) = storage.remove_item(ACCESS_TOKEN_KEY) {
            log::warn!("Failed to clear access token: {:?}", e);
        } else {
            log::info!("Stored access token cleared");
        }
    }
}
