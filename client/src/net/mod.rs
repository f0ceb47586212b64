//! Networking entry points for pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP clients themselves live in `links`; this module binds them to
//! the build-time configuration and to browser storage.

pub mod storage;

use links::{ClientConfig, GoTrueClient, HttpLinksApi};

use self::storage::BrowserStorage;

/// Provider client persisting its session in `localStorage`.
pub fn auth_client() -> GoTrueClient<BrowserStorage> {
    GoTrueClient::new(&ClientConfig::from_build_env(), BrowserStorage)
}

pub fn links_api() -> HttpLinksApi {
    HttpLinksApi::new(&ClientConfig::from_build_env())
}
