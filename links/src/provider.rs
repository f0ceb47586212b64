//! Authentication provider seam and its GoTrue HTTP client.
//!
//! ARCHITECTURE
//! ============
//! Pages reach the provider only through [`AuthProvider`], so the guard and
//! the auth form can be driven by mocks. [`GoTrueClient`] speaks the
//! provider's REST API with `reqwest` and owns the persisted session: sign-in
//! writes it to a [`SessionStorage`] slot, sign-out clears it, and
//! `get_session` reads it back (refreshing it when it has expired).
//!
//! TRADE-OFFS
//! ==========
//! Futures are `?Send` because the browser transport is single-threaded.
//! Sign-out clears local state before contacting the provider, so a failed
//! logout request still leaves the client signed out.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use tracing::warn;

use crate::config::ClientConfig;
use crate::error::AuthError;
use crate::model::{Credentials, Session};

/// Storage slot holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "linkbin-auth-token";

// =============================================================================
// TRAITS
// =============================================================================

/// Operations the pages need from the authentication provider.
#[async_trait(?Send)]
pub trait AuthProvider {
    /// Current session, if one is stored and still usable.
    async fn get_session(&self) -> Result<Option<Session>, AuthError>;

    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    /// `None` when the provider requires email confirmation before issuing a
    /// session.
    async fn sign_up(&self, credentials: &Credentials) -> Result<Option<Session>, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Key/value slot the provider client persists its session in.
pub trait SessionStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local storage, used on the server and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

// =============================================================================
// GOTRUE CLIENT
// =============================================================================

pub struct GoTrueClient<S> {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    storage: S,
}

impl<S: SessionStorage> GoTrueClient<S> {
    #[must_use]
    pub fn new(config: &ClientConfig, storage: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.auth_url.clone(),
            anon_key: config.auth_anon_key.clone(),
            storage,
        }
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn stored_session(&self) -> Option<Session> {
        let raw = self.storage.load(SESSION_STORAGE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(error = %e, "discarding unreadable stored session");
                self.storage.remove(SESSION_STORAGE_KEY);
                None
            }
        }
    }

    fn persist(&self, session: &Session) {
        match serde_json::to_string(session) {
            Ok(raw) => self.storage.save(SESSION_STORAGE_KEY, &raw),
            Err(e) => warn!(error = %e, "session serialization failed"),
        }
    }

    async fn post_json(&self, url: &str, body: &impl serde::Serialize) -> Result<String, AuthError> {
        let response = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(rejection(status, &text));
        }
        Ok(text)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let text = self
            .post_json(&token_endpoint(&self.base_url, "refresh_token"), &body)
            .await?;
        parse_session(&text, now_secs())
    }
}

#[async_trait(?Send)]
impl<S: SessionStorage> AuthProvider for GoTrueClient<S> {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        let Some(session) = self.stored_session() else {
            return Ok(None);
        };
        if !session.is_expired(now_secs()) {
            return Ok(Some(session));
        }
        let Some(refresh_token) = session.refresh_token.as_deref() else {
            self.storage.remove(SESSION_STORAGE_KEY);
            return Ok(None);
        };

        match self.refresh(refresh_token).await {
            Ok(fresh) => {
                self.persist(&fresh);
                Ok(Some(fresh))
            }
            // Transport failures keep the stored session for a later retry.
            Err(e @ AuthError::Request(_)) => Err(e),
            Err(e) => {
                warn!(error = %e, "session refresh rejected");
                self.storage.remove(SESSION_STORAGE_KEY);
                Ok(None)
            }
        }
    }

    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let text = self
            .post_json(&token_endpoint(&self.base_url, "password"), credentials)
            .await?;
        let session = parse_session(&text, now_secs())?;
        self.persist(&session);
        Ok(session)
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Option<Session>, AuthError> {
        let text = self
            .post_json(&signup_endpoint(&self.base_url), credentials)
            .await?;
        let session = parse_signup(&text, now_secs())?;
        if let Some(session) = &session {
            self.persist(session);
        }
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let session = self.stored_session();
        self.storage.remove(SESSION_STORAGE_KEY);
        let Some(session) = session else {
            return Ok(());
        };

        let response = self
            .http
            .post(logout_endpoint(&self.base_url))
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, session.bearer())
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let text = response.text().await.unwrap_or_default();
        Err(rejection(status, &text))
    }
}

// =============================================================================
// WIRE HELPERS
// =============================================================================

pub(crate) fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

pub(crate) fn token_endpoint(base_url: &str, grant_type: &str) -> String {
    format!("{base_url}/auth/v1/token?grant_type={grant_type}")
}

pub(crate) fn signup_endpoint(base_url: &str) -> String {
    format!("{base_url}/auth/v1/signup")
}

pub(crate) fn logout_endpoint(base_url: &str) -> String {
    format!("{base_url}/auth/v1/logout")
}

/// Build a rejection from a provider error body.
///
/// The provider has used several error shapes over time; the first present
/// of `msg`, `error_description`, `message`, `error` wins.
pub(crate) fn rejection(status: u16, body: &str) -> AuthError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["msg", "error_description", "message", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(str::to_owned))
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("auth request failed: {status}"));
    AuthError::Rejected { status, message }
}

pub(crate) fn parse_session(body: &str, now: i64) -> Result<Session, AuthError> {
    let session: Session = serde_json::from_str(body).map_err(|e| AuthError::Parse(e.to_string()))?;
    Ok(session.with_expiry_from(now))
}

/// Sign-up answers with a session when auto-confirm is on, otherwise with the
/// bare user record.
pub(crate) fn parse_signup(body: &str, now: i64) -> Result<Option<Session>, AuthError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| AuthError::Parse(e.to_string()))?;
    if value.get("access_token").is_none() {
        return Ok(None);
    }
    let session: Session = serde_json::from_value(value).map_err(|e| AuthError::Parse(e.to_string()))?;
    Ok(Some(session.with_expiry_from(now)))
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod tests;
