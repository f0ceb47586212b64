//! Client configuration baked in at build time.
//!
//! The browser bundle has no runtime environment, so endpoints come from
//! `option_env!` when this crate is compiled:
//!
//! - `LINKBIN_API_URL`: links API base URL (default `http://localhost:8000`)
//! - `LINKBIN_AUTH_URL`: auth provider base URL (default `http://localhost:54321`)
//! - `LINKBIN_AUTH_ANON_KEY`: public provider key sent as `apikey` (default empty)

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_AUTH_URL: &str = "http://localhost:54321";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub auth_url: String,
    pub auth_anon_key: String,
}

impl ClientConfig {
    /// Build a config, stripping whitespace and trailing slashes from URLs.
    #[must_use]
    pub fn new(api_url: &str, auth_url: &str, auth_anon_key: &str) -> Self {
        Self {
            api_url: normalize_base_url(api_url),
            auth_url: normalize_base_url(auth_url),
            auth_anon_key: auth_anon_key.trim().to_owned(),
        }
    }

    /// Config captured from the build environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(
            non_empty_or(option_env!("LINKBIN_API_URL"), DEFAULT_API_URL),
            non_empty_or(option_env!("LINKBIN_AUTH_URL"), DEFAULT_AUTH_URL),
            option_env!("LINKBIN_AUTH_ANON_KEY").unwrap_or_default(),
        )
    }
}

fn non_empty_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(fallback)
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
